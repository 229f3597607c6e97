//! Live camera panel: one frame, one `video_cam` subscription, a canvas.

use benchdeck_common::{DeckError, FrameId, ListenerId, Size, TaskId};
use benchdeck_frames::{FrameManager, FrameSpec};
use benchdeck_mux::{ChannelState, Multiplexer};

use crate::canvas::{decode_image, lock_canvas, SharedCanvas};
use crate::panel::ChannelBinding;
use crate::payload::{TaskPayload, VideoParams};

pub struct VideoPanel {
    frame: FrameId,
    listener: ListenerId,
}

impl VideoPanel {
    pub const TITLE: &'static str = "Live Cam";

    pub fn open(
        mux: &Multiplexer,
        frames: &mut FrameManager,
        canvas: SharedCanvas,
    ) -> Result<Self, DeckError> {
        Self::open_with(mux, frames, canvas, VideoParams::default())
    }

    pub fn open_with(
        mux: &Multiplexer,
        frames: &mut FrameManager,
        canvas: SharedCanvas,
        params: VideoParams,
    ) -> Result<Self, DeckError> {
        let binding = ChannelBinding::new(mux.clone(), TaskId::VideoCam);

        let teardown = binding.clone();
        let spec = FrameSpec::new(Self::TITLE, Size::new(600.0, 428.0))
            .on_dispose(move || teardown.teardown());
        let frame = frames.create(spec);
        let listener = ListenerId::from(frame);
        binding.bind(listener);

        let result = mux.subscribe(listener, TaskId::VideoCam, move |success, response| {
            if !success {
                return;
            }
            if let Some(bytes) = decode_image(response) {
                lock_canvas(&canvas).draw_frame(&bytes);
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

        let connect = TaskPayload::VideoCam(params);
        if !mux.send(TaskId::VideoCam, ChannelState::Connect, connect.to_value()) {
            tracing::warn!("video stream request not sent, link closed");
        }

        Ok(Self { frame, listener })
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}
