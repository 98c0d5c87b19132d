//! Specification Upload Flow
//!
//! Idle -> Parsing -> Parsed. The "parse" is a timer: file bytes are never
//! read and the extraction result is a fixed string.

use leptos_filedrop::DroppedFile;

use crate::mock_data::EXTRACTION_RESULT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Parsing,
    Parsed,
}

/// Redeemed when the simulated parse delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadFlow {
    file: Option<DroppedFile>,
    phase: UploadPhase,
    epoch: u64,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&DroppedFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Take a new file and start parsing it. Replaces any earlier file.
    pub fn select(&mut self, file: DroppedFile) -> ParseTicket {
        self.epoch += 1;
        self.file = Some(file);
        self.phase = UploadPhase::Parsing;
        ParseTicket(self.epoch)
    }

    /// Mark parsing complete. Ignored if the file was removed or replaced
    /// since `ticket` was issued.
    pub fn finish(&mut self, ticket: ParseTicket) -> bool {
        if ticket.0 != self.epoch || self.phase != UploadPhase::Parsing {
            return false;
        }
        self.phase = UploadPhase::Parsed;
        true
    }

    /// Remove the file and return to idle
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.file = None;
        self.phase = UploadPhase::Idle;
    }

    /// Proceeding to results is allowed only after parsing completes
    pub fn can_proceed(&self) -> bool {
        self.phase == UploadPhase::Parsed
    }

    pub fn status_label(&self) -> &'static str {
        match self.phase {
            UploadPhase::Idle => "Waiting",
            UploadPhase::Parsing => "Parsing Dimensions...",
            UploadPhase::Parsed => "Analysis Complete",
        }
    }

    pub fn extraction(&self) -> Option<&'static str> {
        self.can_proceed().then_some(EXTRACTION_RESULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> DroppedFile {
        DroppedFile::new("sterling-kitchen.pdf", 2_400_000)
    }

    #[test]
    fn test_parse_cycle() {
        let mut flow = UploadFlow::new();
        assert!(!flow.can_proceed());
        assert_eq!(flow.status_label(), "Waiting");

        let ticket = flow.select(plan());
        assert_eq!(flow.phase(), UploadPhase::Parsing);
        assert!(!flow.can_proceed());
        assert!(flow.extraction().is_none());

        assert!(flow.finish(ticket));
        assert!(flow.can_proceed());
        assert_eq!(flow.extraction(), Some(EXTRACTION_RESULT));
        assert_eq!(flow.status_label(), "Analysis Complete");
    }

    #[test]
    fn test_clear_discards_pending_parse() {
        let mut flow = UploadFlow::new();
        let ticket = flow.select(plan());
        flow.clear();

        assert!(!flow.finish(ticket));
        assert_eq!(flow.phase(), UploadPhase::Idle);
        assert!(flow.file().is_none());
    }

    #[test]
    fn test_replacing_file_restarts_parse() {
        let mut flow = UploadFlow::new();
        let first = flow.select(plan());
        let second = flow.select(DroppedFile::new("tower.ifc", 10));

        assert!(!flow.finish(first));
        assert_eq!(flow.phase(), UploadPhase::Parsing);
        assert!(flow.finish(second));
        assert_eq!(flow.file().map(|f| f.name.as_str()), Some("tower.ifc"));
    }
}
