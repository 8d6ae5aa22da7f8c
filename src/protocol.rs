use crate::game::input::Steer;
use crate::game::state::GameEvent;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
  #[serde(rename = "start")]
  Start,
  #[serde(rename = "steer")]
  Steer { action: Steer },
  #[serde(rename = "heading")]
  Heading { value: f64 },
  #[serde(rename = "tilt")]
  Tilt { gamma: f64, beta: f64 },
  #[serde(rename = "resize")]
  Resize {
    width: f64,
    height: f64,
    #[serde(rename = "pixelRatio")]
    pixel_ratio: Option<f64>,
  },
}

pub fn decode_client_message(text: &str) -> Option<ClientMessage> {
  match serde_json::from_str::<ClientMessage>(text) {
    Ok(message) => Some(message),
    Err(error) => {
      tracing::debug!(%error, "dropping malformed client message");
      None
    }
  }
}

pub fn encode_event(event: &GameEvent) -> Option<String> {
  match serde_json::to_string(event) {
    Ok(payload) => Some(payload),
    Err(error) => {
      tracing::warn!(%error, "failed to encode game event");
      None
    }
  }
}
