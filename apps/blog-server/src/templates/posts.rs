//! Post list and post detail pages.

use maud::{Markup, html};

use blog_core::domain::{Comment, Post};
use blog_core::pagination::{Page, PageWindow};
use blog_core::service::PostDetail;
use blog_shared::{CommentForm, FormErrors};

use super::comments;
use super::layout::{self, long_date, paragraphs, truncate_words};

/// Words of the body shown per post in the listing.
const EXCERPT_WORDS: usize = 30;

pub fn list(page: &Page<Post>) -> Markup {
    layout::page(
        layout::SITE_TITLE,
        html! {
            h1 { (layout::SITE_TITLE) }
            @if page.items.is_empty() {
                p { "No posts have been published yet." }
            }
            @for post in &page.items {
                article {
                    h2 { a href=(post.absolute_path()) { (post.title) } }
                    p class="date" { "Published " (long_date(&post.publish)) }
                    p { (truncate_words(&post.body, EXCERPT_WORDS)) }
                }
            }
            (pagination(&page.window))
        },
    )
}

fn pagination(window: &PageWindow) -> Markup {
    html! {
        div class="pagination" {
            @if let Some(previous) = window.previous_page_number() {
                a href={ "?page=" (previous) } { "Previous" } " "
            }
            span class="current" { "Page " (window.number) " of " (window.num_pages) "." }
            @if let Some(next) = window.next_page_number() {
                " " a href={ "?page=" (next) } { "Next" }
            }
        }
    }
}

pub fn detail(detail: &PostDetail, form: &CommentForm, errors: &FormErrors) -> Markup {
    let post = &detail.post;
    layout::page(
        &post.title,
        html! {
            h1 { (post.title) }
            p class="date" { "Published " (long_date(&post.publish)) }
            (paragraphs(&post.body))
            p { a href={ "/" (post.id) "/share/" } { "Share this post" } }

            h2 { (comment_count(detail.comments.len())) }
            @for (i, comment) in detail.comments.iter().enumerate() {
                (comment_entry(i + 1, comment))
            }
            @if detail.comments.is_empty() {
                p { "There are no comments." }
            }
            (comments::form(post.id, form, errors))
        },
    )
}

fn comment_count(n: usize) -> String {
    match n {
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    }
}

fn comment_entry(position: usize, comment: &Comment) -> Markup {
    html! {
        div class="comment" {
            p class="info" {
                "Comment " (position) " by " (comment.name) " " (long_date(&comment.created))
            }
            (paragraphs(&comment.body))
        }
    }
}
