//! Pass/fail detection for test ROMs that report over the serial port.

/// Mooneye acceptance ROMs send the Fibonacci bytes on success.
const MOONEYE_PASS: [u8; 6] = [3, 5, 8, 13, 21, 34];
const MOONEYE_FAIL: [u8; 6] = [0x42; 6];

/// Outcome of a compliance ROM run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Passed,
    Failed,
    /// The ROM has not reported a result yet.
    Pending,
}

impl Verdict {
    /// blargg's suites print "Passed" or "Failed" as ASCII text.
    pub fn from_blargg_serial(output: &[u8]) -> Self {
        if contains(output, b"Passed") {
            Self::Passed
        } else if contains(output, b"Failed") {
            Self::Failed
        } else {
            Self::Pending
        }
    }

    pub fn from_mooneye_serial(output: &[u8]) -> Self {
        if contains(output, &MOONEYE_PASS) {
            Self::Passed
        } else if contains(output, &MOONEYE_FAIL) {
            Self::Failed
        } else {
            Self::Pending
        }
    }

    pub fn is_done(self) -> bool {
        self != Self::Pending
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
