//! Function-body exclusion for the usage pass.
//!
//! References inside a multi-line function literal are local, not
//! module-level dependencies, so those lines are retained as content but
//! never scanned for usages.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyState {
    Outside,
    Inside { depth: i32 },
}

/// Two-state machine tracking whether the current line sits inside a
/// multi-line function literal.
///
/// A line containing the `function` keyword enters the body; from then on
/// the running brace balance is tracked, and the state leaves the body when
/// the balance returns to exactly zero. A one-line body (`function() {}`)
/// balances immediately, so its line is still scanned.
pub struct BodyTracker {
    state: BodyState,
}

impl Default for BodyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyTracker {
    pub fn new() -> Self {
        Self {
            state: BodyState::Outside,
        }
    }

    /// Feed one line. Returns true when the line is inside a function body
    /// and must be excluded from usage scanning.
    pub fn observe(&mut self, line: &str) -> bool {
        if self.state == BodyState::Outside && line.contains("function") {
            self.state = BodyState::Inside { depth: 0 };
        }
        if let BodyState::Inside { depth } = self.state {
            let opens = line.matches('{').count() as i32;
            let closes = line.matches('}').count() as i32;
            let depth = depth + opens - closes;
            self.state = if depth == 0 {
                BodyState::Outside
            } else {
                BodyState::Inside { depth }
            };
        }
        matches!(self.state, BodyState::Inside { .. })
    }
}
