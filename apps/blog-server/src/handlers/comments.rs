//! Comment submission.

use actix_web::{HttpResponse, web};

use blog_shared::forms::check;
use blog_shared::{CommentForm, FormErrors};

use super::{html, parsed_form};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates;

/// POST /{post_id}/comment/
///
/// An invalid form is rendered again with its errors and nothing is stored.
pub async fn post_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: Option<web::Form<CommentForm>>,
) -> AppResult<HttpResponse> {
    let post = state.blog.published_post(path.into_inner()).await?;

    let mut form = parsed_form(form)?;
    form.clean();

    if let Err(errors) = check(&form) {
        tracing::debug!(post_id = post.id, fields = ?errors.fields().collect::<Vec<_>>(), "Comment rejected");
        return Ok(html(templates::comments::submitted(&post, None, &form, &errors)));
    }

    let comment = state
        .blog
        .add_comment(&post, form.name.clone(), form.email.clone(), form.body.clone())
        .await?;

    Ok(html(templates::comments::submitted(
        &post,
        Some(&comment),
        &CommentForm::default(),
        &FormErrors::default(),
    )))
}
