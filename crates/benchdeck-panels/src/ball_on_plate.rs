//! Ball-on-plate simulator panel: streams rendered simulation frames and
//! supports stopping/restarting the stream without closing the panel.

use benchdeck_common::{DeckError, FrameId, ListenerId, Size, TaskId};
use benchdeck_frames::{FrameManager, FrameSpec};
use benchdeck_mux::{ChannelState, Multiplexer};
use serde_json::json;

use crate::canvas::{decode_image, lock_canvas, SharedCanvas};
use crate::panel::ChannelBinding;
use crate::payload::{BallOnPlateParams, TaskPayload};

pub struct BallOnPlatePanel {
    frame: FrameId,
    listener: ListenerId,
    mux: Multiplexer,
    params: BallOnPlateParams,
}

impl BallOnPlatePanel {
    pub const TITLE: &'static str = "Ball On Plate";

    pub fn open(
        mux: &Multiplexer,
        frames: &mut FrameManager,
        canvas: SharedCanvas,
    ) -> Result<Self, DeckError> {
        Self::open_with(mux, frames, canvas, BallOnPlateParams::default())
    }

    pub fn open_with(
        mux: &Multiplexer,
        frames: &mut FrameManager,
        canvas: SharedCanvas,
        params: BallOnPlateParams,
    ) -> Result<Self, DeckError> {
        let binding = ChannelBinding::new(mux.clone(), TaskId::BallOnPlate);

        let teardown = binding.clone();
        let spec = FrameSpec::new(Self::TITLE, Size::new(512.0, 662.0))
            .on_dispose(move || teardown.teardown());
        let frame = frames.create(spec);
        let listener = ListenerId::from(frame);
        binding.bind(listener);

        // Unsuccessful frames blank the canvas: the agent run ended.
        let result = mux.subscribe(listener, TaskId::BallOnPlate, move |success, response| {
            if success {
                if let Some(bytes) = decode_image(response) {
                    lock_canvas(&canvas).draw_frame(&bytes);
                }
            } else {
                lock_canvas(&canvas).clear();
            }
        });
        if let Err(e) = result {
            frames.dispose(frame);
            return Err(e.into());
        }

        if let Err(e) = frames.show(frame) {
            frames.dispose(frame);
            return Err(e.into());
        }

        let panel = Self {
            frame,
            listener,
            mux: mux.clone(),
            params,
        };
        panel.start();
        Ok(panel)
    }

    /// Ask the backend to (re)start the simulation stream.
    pub fn start(&self) -> bool {
        let payload = TaskPayload::BallOnPlate(self.params.clone());
        self.mux
            .send(TaskId::BallOnPlate, ChannelState::Connect, payload.to_value())
    }

    /// Stop the stream without disposing the panel.
    pub fn stop(&self) -> bool {
        self.mux
            .send(TaskId::BallOnPlate, ChannelState::Disconnect, json!({}))
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn params(&self) -> &BallOnPlateParams {
        &self.params
    }
}
