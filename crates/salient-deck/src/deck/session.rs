use super::domain::{DeckError, Slide, SlideKind};
use super::navigation::SlideCursor;
use super::swipe::{SwipeDirection, SwipeGesture, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::calculator::{
    CalculatorInputs, CalculatorView, InputField, ValueBreakdown, WaterfallPolicy,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a viewer of the deck can change: the slide and the calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckSession {
    pub current: usize,
    #[serde(default)]
    pub inputs: CalculatorInputs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeckAction {
    Next,
    Prev,
    JumpTo { index: usize },
    Swipe(SwipeGesture),
    Increment { field: InputField },
    Decrement { field: InputField },
    Enter { field: InputField, raw: String },
}

/// Rendered state of a session: current slide, navigation flags and calculator output.
#[derive(Debug, Clone, Serialize)]
pub struct DeckSnapshot {
    pub index: usize,
    pub total: usize,
    pub slide: Slide,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ValueBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculator: Option<CalculatorView>,
}

/// Immutable slide catalogue plus the policy used by the calculator slide.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    policy: WaterfallPolicy,
    swipe_threshold_px: f64,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self {
            slides,
            policy: WaterfallPolicy::default(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        })
    }

    pub fn standard() -> Self {
        Self {
            slides: SlideKind::ordered().into_iter().map(Slide::from).collect(),
            policy: WaterfallPolicy::default(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }

    pub fn with_swipe_threshold(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn policy(&self) -> &WaterfallPolicy {
        &self.policy
    }

    pub fn swipe_threshold_px(&self) -> f64 {
        self.swipe_threshold_px
    }

    pub fn position_of(&self, kind: SlideKind) -> Option<usize> {
        self.slides.iter().position(|slide| slide.kind == kind)
    }

    /// Pure state transition. The input session is never modified.
    pub fn apply(
        &self,
        session: DeckSession,
        action: &DeckAction,
    ) -> Result<DeckSession, DeckError> {
        let cursor = SlideCursor::new(session.current, self.len())?;
        let mut next = session;

        match action {
            DeckAction::Next => next.current = cursor.next().current(),
            DeckAction::Prev => next.current = cursor.prev().current(),
            DeckAction::JumpTo { index } => next.current = cursor.jump_to(*index)?.current(),
            DeckAction::Swipe(gesture) => match gesture.resolve(self.swipe_threshold_px) {
                Some(SwipeDirection::Forward) => next.current = cursor.next().current(),
                Some(SwipeDirection::Back) => next.current = cursor.prev().current(),
                None => {}
            },
            DeckAction::Increment { field } => {
                let value = field.spec().increment(session.inputs.get(*field));
                next.inputs.set(*field, value);
            }
            DeckAction::Decrement { field } => {
                let value = field.spec().decrement(session.inputs.get(*field));
                next.inputs.set(*field, value);
            }
            DeckAction::Enter { field, raw } => {
                let spec = field.spec();
                let value = spec.parse_entry(raw);
                if !spec.contains(value) {
                    debug!(?field, value, "direct entry outside field bounds");
                }
                next.inputs.set(*field, value);
            }
        }

        debug!(from = session.current, to = next.current, ?action, "deck action applied");
        Ok(next)
    }

    pub fn apply_all<'a, I>(
        &self,
        session: DeckSession,
        actions: I,
    ) -> Result<DeckSession, DeckError>
    where
        I: IntoIterator<Item = &'a DeckAction>,
    {
        actions
            .into_iter()
            .try_fold(session, |state, action| self.apply(state, action))
    }

    pub fn breakdown(&self, inputs: &CalculatorInputs) -> ValueBreakdown {
        ValueBreakdown::compute(inputs, &self.policy)
    }

    pub fn snapshot(&self, session: &DeckSession) -> Result<DeckSnapshot, DeckError> {
        let cursor = SlideCursor::new(session.current, self.len())?;
        let slide = self.slides[cursor.current()].clone();

        let (breakdown, calculator) = if slide.kind == SlideKind::BusinessCalculator {
            let breakdown = self.breakdown(&session.inputs);
            let view = CalculatorView::build(&session.inputs, &self.policy, &breakdown);
            (Some(breakdown), Some(view))
        } else {
            (None, None)
        };

        Ok(DeckSnapshot {
            index: cursor.current(),
            total: cursor.len(),
            slide,
            can_go_back: cursor.can_go_back(),
            can_go_forward: cursor.can_go_forward(),
            breakdown,
            calculator,
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::swipe::TouchPoint;

    fn swipe(dx: f64) -> DeckAction {
        DeckAction::Swipe(SwipeGesture {
            start: TouchPoint { x: 400.0, y: 200.0 },
            end: TouchPoint {
                x: 400.0 - dx,
                y: 210.0,
            },
        })
    }

    #[test]
    fn apply_leaves_the_original_session_untouched() {
        let deck = Deck::standard();
        let session = DeckSession::default();
        let next = deck.apply(session, &DeckAction::Next).expect("next applies");
        assert_eq!(session.current, 0);
        assert_eq!(next.current, 1);
    }

    #[test]
    fn swipes_follow_threshold_and_direction() {
        let deck = Deck::standard();
        let session = deck
            .apply(DeckSession::default(), &swipe(120.0))
            .expect("swipe applies");
        assert_eq!(session.current, 1);

        let session = deck.apply(session, &swipe(-120.0)).expect("swipe applies");
        assert_eq!(session.current, 0);

        let session = deck.apply(session, &swipe(30.0)).expect("swipe applies");
        assert_eq!(session.current, 0);

        let sensitive = Deck::standard().with_swipe_threshold(10.0);
        let session = sensitive.apply(session, &swipe(30.0)).expect("swipe applies");
        assert_eq!(session.current, 1);
    }

    #[test]
    fn stale_sessions_are_rejected() {
        let deck = Deck::standard();
        let session = DeckSession {
            current: 99,
            ..DeckSession::default()
        };
        assert_eq!(
            deck.apply(session, &DeckAction::Next),
            Err(DeckError::SlideOutOfRange { index: 99, len: 20 })
        );
    }

    #[test]
    fn enter_stores_parsed_value_without_clamping() {
        let deck = Deck::standard();
        let session = deck
            .apply(
                DeckSession::default(),
                &DeckAction::Enter {
                    field: InputField::CurrentTimePerClaim,
                    raw: "oops".to_string(),
                },
            )
            .expect("entry applies");
        assert_eq!(session.inputs.current_time_per_claim, 0.0);

        let session = deck
            .apply(
                session,
                &DeckAction::Increment {
                    field: InputField::CurrentTimePerClaim,
                },
            )
            .expect("increment applies");
        assert_eq!(session.inputs.current_time_per_claim, 5.0);
    }

    #[test]
    fn snapshot_only_carries_calculator_on_its_slide() {
        let deck = Deck::standard();
        let title = deck
            .snapshot(&DeckSession::default())
            .expect("snapshot renders");
        assert!(title.calculator.is_none());
        assert!(!title.can_go_back);
        assert!(title.can_go_forward);

        let index = deck
            .position_of(SlideKind::BusinessCalculator)
            .expect("calculator slide present");
        let session = deck
            .apply(DeckSession::default(), &DeckAction::JumpTo { index })
            .expect("jump applies");
        let snapshot = deck.snapshot(&session).expect("snapshot renders");
        let calculator = snapshot.calculator.expect("calculator rendered");
        assert_eq!(calculator.total_value_label, "$3.3M");
        assert!(snapshot.breakdown.is_some());
    }

    #[test]
    fn recovery_above_one_hundred_percent_renders_a_negative_write_off() {
        let deck = Deck::standard();
        let index = deck
            .position_of(SlideKind::BusinessCalculator)
            .expect("calculator slide present");
        let actions = [
            DeckAction::JumpTo { index },
            DeckAction::Enter {
                field: InputField::CurrentRecoveryRate,
                raw: "150".to_string(),
            },
        ];
        let session = deck
            .apply_all(DeckSession::default(), &actions)
            .expect("actions apply");
        assert_eq!(session.inputs.current_recovery_rate, 150.0);

        let calculator = deck
            .snapshot(&session)
            .expect("snapshot renders")
            .calculator
            .expect("calculator rendered");
        let write_off = calculator
            .dispute_flow
            .rows
            .iter()
            .find(|row| row.key == "bank_write_off_amount")
            .expect("write-off row present");
        assert_eq!(write_off.amount_label, "-$8.6M");
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: DeckAction = serde_json::from_str(
            r#"{"type":"increment","field":"current_operational_cost"}"#,
        )
        .expect("action parses");
        assert_eq!(
            action,
            DeckAction::Increment {
                field: InputField::CurrentOperationalCost
            }
        );

        let action: DeckAction = serde_json::from_str(
            r#"{"type":"swipe","start":{"x":300,"y":0},"end":{"x":100,"y":0}}"#,
        )
        .expect("swipe parses");
        assert!(matches!(action, DeckAction::Swipe(_)));

        let action: DeckAction =
            serde_json::from_str(r#"{"type":"jump_to","index":3}"#).expect("jump parses");
        assert_eq!(action, DeckAction::JumpTo { index: 3 });
    }
}
