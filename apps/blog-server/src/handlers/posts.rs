//! Post listing and detail pages.

use actix_web::{HttpResponse, web};

use blog_shared::{CommentForm, FormErrors, PageQuery};

use super::html;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates;

/// GET /?page=N
///
/// Unparsable page numbers show the first page, out-of-range ones the last.
pub async fn post_list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.blog.published_page(query.page.as_deref()).await?;
    Ok(html(templates::posts::list(&page)))
}

/// GET /{year}/{month}/{day}/{slug}/
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, u32, String)>,
) -> AppResult<HttpResponse> {
    let (year, month, day, slug) = path.into_inner();
    let detail = state.blog.post_detail(year, month, day, &slug).await?;

    Ok(html(templates::posts::detail(
        &detail,
        &CommentForm::default(),
        &FormErrors::default(),
    )))
}
