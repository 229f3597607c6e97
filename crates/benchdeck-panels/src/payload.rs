//! Typed payloads, one variant per task.
//!
//! The backend receives these as the free-form `payload` object of a
//! connect request; on this side each task carries its own parameter
//! struct and the old payload-building switch becomes a match.

use benchdeck_common::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platform pose target for the `set` task.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseParams {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Circular trajectory for the `circle` task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    pub radius: f64,
    pub steps: f64,
    pub period: f64,
    pub smooth: bool,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: 5.8,
            steps: 0.1,
            period: 0.0,
            smooth: true,
        }
    }
}

/// Manual control via the nunchuck peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NunchuckParams {
    pub radius: f64,
    pub period: f64,
    pub use_accelerometer: bool,
}

impl Default for NunchuckParams {
    fn default() -> Self {
        Self {
            radius: 5.8,
            period: 0.0,
            use_accelerometer: true,
        }
    }
}

/// Camera stream request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoParams {
    pub resolution: String,
    pub fps: u32,
}

impl Default for VideoParams {
    fn default() -> Self {
        Self {
            resolution: "1280x720".into(),
            fps: 30,
        }
    }
}

/// Simulator / agent selection for the `ball_on_plate` task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallOnPlateParams {
    pub env: String,
    pub id: String,
    pub model_name: String,
    pub sb3_model: String,
    pub device: String,
    pub iterations: u32,
    pub simulation_mode: bool,
    pub fps: u32,
}

impl Default for BallOnPlateParams {
    fn default() -> Self {
        Self {
            env: "BallOnPlate-v0".into(),
            id: "0_9".into(),
            model_name: "best_model.zip".into(),
            sb3_model: "ppo".into(),
            device: "cpu".into(),
            iterations: 10,
            simulation_mode: false,
            fps: 10,
        }
    }
}

/// A task together with its typed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskPayload {
    Set(PoseParams),
    Circle(CircleParams),
    Nunchuck(NunchuckParams),
    VideoCam(VideoParams),
    BallOnPlate(BallOnPlateParams),
}

impl TaskPayload {
    pub fn task_id(&self) -> TaskId {
        match self {
            TaskPayload::Set(_) => TaskId::Set,
            TaskPayload::Circle(_) => TaskId::Circle,
            TaskPayload::Nunchuck(_) => TaskId::Nunchuck,
            TaskPayload::VideoCam(_) => TaskId::VideoCam,
            TaskPayload::BallOnPlate(_) => TaskId::BallOnPlate,
        }
    }

    /// The wire `payload` object (the inner struct only, no tag).
    pub fn to_value(&self) -> Value {
        let result = match self {
            TaskPayload::Set(p) => serde_json::to_value(p),
            TaskPayload::Circle(p) => serde_json::to_value(p),
            TaskPayload::Nunchuck(p) => serde_json::to_value(p),
            TaskPayload::VideoCam(p) => serde_json::to_value(p),
            TaskPayload::BallOnPlate(p) => serde_json::to_value(p),
        };
        result.unwrap_or(Value::Null)
    }
}
