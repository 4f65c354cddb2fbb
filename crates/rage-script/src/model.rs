use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use rage_natives::handles::ModelHash;
use rage_natives::{ClockNatives, StreamingNatives};

/// A streamable model, identified by its joaat hash.
///
/// Plain value: queries and the streaming request take the host binding
/// per call, so a `Model` can be stored and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model {
    hash: ModelHash,
}

impl Model {
    /// Streaming deadline used when the caller does not pick one.
    pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

    pub fn new(hash: ModelHash) -> Self {
        Self { hash }
    }

    pub fn hash(self) -> ModelHash {
        self.hash
    }

    /// Whether the model exists in the game image at all.
    pub fn is_in_cd_image<N>(self, natives: &N) -> bool
    where
        N: StreamingNatives + ?Sized,
    {
        natives.is_model_in_cdimage(self.hash) != 0
    }

    pub fn is_valid<N>(self, natives: &N) -> bool
    where
        N: StreamingNatives + ?Sized,
    {
        natives.is_model_valid(self.hash) != 0
    }

    pub fn is_ped<N>(self, natives: &N) -> bool
    where
        N: StreamingNatives + ?Sized,
    {
        natives.is_model_a_ped(self.hash) != 0
    }

    pub fn is_vehicle<N>(self, natives: &N) -> bool
    where
        N: StreamingNatives + ?Sized,
    {
        natives.is_model_a_vehicle(self.hash) != 0
    }

    /// Tell the streamer this script no longer pins the model in memory.
    pub fn mark_as_no_longer_needed<N>(self, natives: &N)
    where
        N: StreamingNatives + ?Sized,
    {
        natives.set_model_as_no_longer_needed(self.hash);
    }

    /// Queue the model for streaming and wait until it is loaded.
    ///
    /// Polls the streamer once per host tick, yielding in between, and
    /// resolves `false` if the host game timer passes `timeout_ms` before
    /// the model arrives. The request itself is not withdrawn on timeout;
    /// the streamer may still finish it later.
    pub async fn request<N>(self, natives: &N, timeout_ms: u32) -> bool
    where
        N: StreamingNatives + ClockNatives + ?Sized,
    {
        natives.request_model(self.hash);
        let start = natives.get_game_timer();
        while natives.has_model_loaded(self.hash) == 0 {
            if natives.get_game_timer().wrapping_sub(start) >= timeout_ms {
                return false;
            }
            yield_now().await;
        }
        true
    }
}

/// Suspend once, resuming on the executor's next pass.
///
/// The host drives script futures one poll per tick, so a single
/// wake-then-pend round trip is exactly "wait one tick".
fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
