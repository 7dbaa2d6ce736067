use super::ProbeResult;

/// Substrings that mark a rejection as a policy decision rather than a
/// statement about the mailbox.
pub const POLICY_KEYWORDS: &[&str] = &[
    "policy",
    "spam",
    "relay",
    "blocked",
    "denied",
    "blacklist",
    "authentication",
    "not permitted",
    "access denied",
];

fn mentions_policy(lowered: &str) -> bool {
    POLICY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Maps an SMTP status code and its message to a [`ProbeResult`].
///
/// 550/551/553 are ambiguous between "no such mailbox" and "we refuse to
/// tell"; the message text decides between the two. Unknown codes are
/// treated as the server declining to cooperate.
pub fn classify_smtp(code: u16, message: &str) -> ProbeResult {
    let lowered = message.to_lowercase();
    match code {
        250 | 251 => ProbeResult::ExistsLikely,
        550 | 551 | 553 if mentions_policy(&lowered) => ProbeResult::ServerBlocked,
        550 | 551 | 553 => ProbeResult::NotExists,
        421 | 450 | 451 | 452 => ProbeResult::TempFail,
        530 | 535 | 554 => ProbeResult::ServerBlocked,
        _ => ProbeResult::ServerBlocked,
    }
}
