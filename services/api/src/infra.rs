use metrics_exporter_prometheus::PrometheusHandle;
use salient_deck::calculator::InputField;
use salient_deck::deck::DeckAction;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses the compact action syntax used by `deck play`.
///
/// Accepts `next`, `prev`, `jump:<index>`, `inc:<field>`, `dec:<field>` and
/// `set:<field>=<raw>`, where `<field>` is the snake_case input name.
pub(crate) fn parse_action(raw: &str) -> Result<DeckAction, String> {
    let raw = raw.trim();
    let (verb, rest) = raw.split_once(':').unwrap_or((raw, ""));

    match verb {
        "next" => Ok(DeckAction::Next),
        "prev" => Ok(DeckAction::Prev),
        "jump" => rest
            .parse::<usize>()
            .map(|index| DeckAction::JumpTo { index })
            .map_err(|err| format!("invalid slide index '{rest}' ({err})")),
        "inc" => parse_field(rest).map(|field| DeckAction::Increment { field }),
        "dec" => parse_field(rest).map(|field| DeckAction::Decrement { field }),
        "set" => {
            let (field, value) = rest
                .split_once('=')
                .ok_or_else(|| format!("expected set:<field>=<value>, got '{raw}'"))?;
            Ok(DeckAction::Enter {
                field: parse_field(field)?,
                raw: value.to_string(),
            })
        }
        other => Err(format!("unknown deck action '{other}'")),
    }
}

pub(crate) fn parse_field(raw: &str) -> Result<InputField, String> {
    serde_json::from_value(Value::String(raw.trim().to_string()))
        .map_err(|_| format!("unknown calculator field '{raw}'"))
}
