use serde::Serialize;

use crate::upstream::UpstreamPage;

/// Envelope relayed to the caller after a completed upstream fetch.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutboundResult {
    pub status: u16,
    pub ok: bool,
    pub target: String,
    pub length: usize,
    pub html: String,
}

impl OutboundResult {
    pub fn new(target: String, page: UpstreamPage) -> OutboundResult {
        OutboundResult {
            status: page.status,
            ok: page.ok,
            target,
            // UTF-16 code units, as a browser's String.length reports
            length: page.body.encode_utf16().count(),
            html: page.body,
        }
    }

    /// Same envelope minus the body, for terse output.
    pub fn summary(&self) -> OutboundSummary<'_> {
        OutboundSummary {
            status: self.status,
            ok: self.ok,
            target: &self.target,
            length: self.length,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct OutboundSummary<'a> {
    pub status: u16,
    pub ok: bool,
    pub target: &'a str,
    pub length: usize,
}
