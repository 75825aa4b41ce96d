/// Fenced code block delimiter.
///
/// The fence toggles: the same marker opens and closes a block. Text after an
/// opening fence is an optional info string (language tag).
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if `remainder` starts with a fence.
    pub fn is_fence(remainder: &str) -> bool {
        remainder.starts_with(Self::BACKTICKS)
    }

    /// Returns the info string after an opening fence, if any.
    pub fn info(remainder: &str) -> Option<&str> {
        let info = remainder.strip_prefix(Self::BACKTICKS)?.trim();
        (!info.is_empty()).then_some(info)
    }
}
