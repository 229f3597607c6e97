//! Control panel: parameter entry for the pose, circle, and nunchuck
//! tasks, with one subscription that follows the selected task.

use benchdeck_common::{DeckError, FrameId, ListenerId, Size, TaskId};
use benchdeck_frames::{FrameManager, FrameSpec};
use benchdeck_mux::{ChannelState, Multiplexer};

use crate::panel::ChannelBinding;
use crate::payload::{CircleParams, NunchuckParams, PoseParams, TaskPayload};

use std::sync::Arc;

pub struct ControlPanel {
    frame: FrameId,
    listener: ListenerId,
    mux: Multiplexer,
    binding: Arc<ChannelBinding>,
    selected: TaskId,
    pose: PoseParams,
    circle: CircleParams,
    nunchuck: NunchuckParams,
}

impl ControlPanel {
    pub const TITLE: &'static str = "Control panel";

    /// Tasks this panel can drive.
    pub const TASKS: [TaskId; 3] = [TaskId::Set, TaskId::Circle, TaskId::Nunchuck];

    pub fn open(mux: &Multiplexer, frames: &mut FrameManager) -> Result<Self, DeckError> {
        let binding = ChannelBinding::new(mux.clone(), TaskId::Set);

        let teardown = binding.clone();
        let spec = FrameSpec::new(Self::TITLE, Size::new(360.0, 420.0))
            .on_dispose(move || teardown.teardown());
        let frame = frames.create(spec);
        let listener = ListenerId::from(frame);
        binding.bind(listener);

        if let Err(e) = Self::subscribe_acks(mux, listener, TaskId::Set) {
            frames.dispose(frame);
            return Err(e);
        }

        if let Err(e) = frames.show(frame) {
            frames.dispose(frame);
            return Err(e.into());
        }

        Ok(Self {
            frame,
            listener,
            mux: mux.clone(),
            binding,
            selected: TaskId::Set,
            pose: PoseParams::default(),
            circle: CircleParams::default(),
            nunchuck: NunchuckParams::default(),
        })
    }

    fn subscribe_acks(
        mux: &Multiplexer,
        listener: ListenerId,
        task: TaskId,
    ) -> Result<(), DeckError> {
        // Control acks carry no payload yet (reserved); log and move on.
        mux.subscribe(listener, task, move |success, _response| {
            tracing::debug!(task = %task, success, "control ack");
        })?;
        Ok(())
    }

    /// Switch the active task, moving the panel's one subscription to the
    /// new channel. Returns `false` for tasks this panel does not drive.
    pub fn select_task(&mut self, task: TaskId) -> bool {
        if !Self::TASKS.contains(&task) {
            return false;
        }
        if task == self.selected {
            return true;
        }

        self.mux.unsubscribe(self.listener);
        if let Err(e) = Self::subscribe_acks(&self.mux, self.listener, task) {
            tracing::warn!(task = %task, error = %e, "task switch failed to resubscribe");
            return false;
        }
        self.binding.retask(task);
        self.selected = task;
        true
    }

    /// Send the selected task's parameters to the backend.
    pub fn apply(&self) -> bool {
        let payload = self.selected_payload();
        self.mux
            .send(self.selected, ChannelState::Connect, payload.to_value())
    }

    pub fn selected_task(&self) -> TaskId {
        self.selected
    }

    pub fn selected_payload(&self) -> TaskPayload {
        match self.selected {
            TaskId::Circle => TaskPayload::Circle(self.circle),
            TaskId::Nunchuck => TaskPayload::Nunchuck(self.nunchuck),
            _ => TaskPayload::Set(self.pose),
        }
    }

    pub fn pose_mut(&mut self) -> &mut PoseParams {
        &mut self.pose
    }

    pub fn circle_mut(&mut self) -> &mut CircleParams {
        &mut self.circle
    }

    pub fn nunchuck_mut(&mut self) -> &mut NunchuckParams {
        &mut self.nunchuck
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}
