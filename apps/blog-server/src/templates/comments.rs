//! Comment form and the page shown after a comment is submitted.

use maud::{Markup, html};

use blog_core::domain::{Comment, Post};
use blog_shared::{CommentForm, FormErrors};

use super::layout::{self, field_errors};

pub fn form(post_id: i64, form: &CommentForm, errors: &FormErrors) -> Markup {
    html! {
        h2 { "Add a new comment" }
        form action={ "/" (post_id) "/comment/" } method="post" {
            label for="id_name" { "Name:" }
            (field_errors(errors, "name"))
            input type="text" name="name" id="id_name" maxlength="80" value=(form.name);

            label for="id_email" { "Email:" }
            (field_errors(errors, "email"))
            input type="email" name="email" id="id_email" value=(form.email);

            label for="id_body" { "Body:" }
            (field_errors(errors, "body"))
            textarea name="body" id="id_body" rows="6" { (form.body) }

            p { input type="submit" value="Add comment"; }
        }
    }
}

/// Result of a comment submission: the stored comment, or the form again
/// with its errors.
pub fn submitted(
    post: &Post,
    comment: Option<&Comment>,
    form: &CommentForm,
    errors: &FormErrors,
) -> Markup {
    layout::page(
        "Add a comment",
        html! {
            @match comment {
                Some(comment) => {
                    h2 { "Your comment has been added." }
                    div class="comment" {
                        p class="info" { "Comment by " (comment.name) }
                        p { (comment.body) }
                    }
                    p { a href=(post.absolute_path()) { "Back to the post" } }
                }
                None => {
                    (self::form(post.id, form, errors))
                }
            }
        },
    )
}
