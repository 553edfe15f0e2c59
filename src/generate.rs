//! Social post generation on top of a pluggable text-generation backend.
use anyhow::{anyhow, Result};

/// Fixed instruction sent alongside every document.
pub const SOCIAL_POST_SYSTEM_PROMPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/social_post_system.md"
));

/// A chat-style text generation backend.
///
/// One call is one blocking round trip: a system instruction plus user input
/// in, generated text out.
pub trait PostGenerator {
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

impl<F> PostGenerator for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        self(system, user)
    }
}

/// Generate a single social post for `content`.
///
/// The reply is trimmed; an empty reply is an error rather than an empty post.
pub fn generate_post<G: PostGenerator + ?Sized>(generator: &G, content: &str) -> Result<String> {
    let reply = generator.complete(SOCIAL_POST_SYSTEM_PROMPT.trim(), content)?;
    let post = reply.trim();
    if post.is_empty() {
        return Err(anyhow!("empty post from generation service"));
    }
    Ok(post.to_string())
}
