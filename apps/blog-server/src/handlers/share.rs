//! Recommend a post by email.

use actix_web::{HttpRequest, HttpResponse, web};

use blog_core::domain::Post;
use blog_core::service::ShareRequest;
use blog_shared::forms::check;
use blog_shared::{EmailPostForm, FormErrors};

use super::{html, parsed_form};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates;

/// GET /{post_id}/share/
pub async fn share_form(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.blog.published_post(path.into_inner()).await?;

    Ok(html(templates::share::page(
        &post,
        &EmailPostForm::default(),
        &FormErrors::default(),
        false,
    )))
}

/// POST /{post_id}/share/
///
/// Sends one email on a valid form. Delivery failures surface as a server
/// error; the send is not retried.
pub async fn share_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: Option<web::Form<EmailPostForm>>,
) -> AppResult<HttpResponse> {
    let post = state.blog.published_post(path.into_inner()).await?;

    let mut form = parsed_form(form)?;
    form.clean();

    if let Err(errors) = check(&form) {
        tracing::debug!(post_id = post.id, fields = ?errors.fields().collect::<Vec<_>>(), "Share form rejected");
        return Ok(html(templates::share::page(&post, &form, &errors, false)));
    }

    let share = ShareRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        to: form.to.clone(),
        comments: form.comments.clone(),
    };
    let url = post_url(&req, state.site_url.as_deref(), &post);
    state.blog.share_post(&post, &share, &url).await?;

    Ok(html(templates::share::page(
        &post,
        &form,
        &FormErrors::default(),
        true,
    )))
}

/// Absolute URL of the post, from the configured site URL or else from the
/// scheme and host the request came in on.
fn post_url(req: &HttpRequest, site_url: Option<&str>, post: &Post) -> String {
    match site_url {
        Some(base) => post.absolute_url(base),
        None => {
            let info = req.connection_info();
            post.absolute_url(&format!("{}://{}", info.scheme(), info.host()))
        }
    }
}
