//! Stepped crossfade between two captured frames
//!
//! Flushes `steps + 1` frames: the source, the intermediate blends and the
//! destination, pausing after each one. The fade blocks until done.

use embassy_time::Duration;

use crate::color::{Rgb, lerp};
use crate::config::FadeConfig;
use crate::io::{Clock, LedSink};
use crate::math8::fraction8;

#[derive(Debug, Clone, Copy)]
pub struct Crossfade {
    steps: u16,
    step_delay: Duration,
}

impl Crossfade {
    pub const fn new(config: &FadeConfig) -> Self {
        Self {
            steps: config.steps,
            step_delay: config.step_delay,
        }
    }

    /// Run the fade from `source` to `destination`
    ///
    /// With zero steps the destination is flushed directly. Returns the
    /// last flushed frame.
    pub fn run<S, C, const N: usize>(
        &self,
        source: &[Rgb; N],
        destination: &[Rgb; N],
        sink: &mut S,
        clock: &mut C,
    ) -> Result<[Rgb; N], S::Error>
    where
        S: LedSink,
        C: Clock,
    {
        if self.steps == 0 {
            sink.set_buffer(destination);
            sink.flush()?;
            return Ok(*destination);
        }

        let mut frame = *source;
        for step in 0..=self.steps {
            let amount = fraction8(step, self.steps);
            Self::blend_into(&mut frame, source, destination, amount);
            sink.set_buffer(&frame);
            sink.flush()?;
            clock.sleep(self.step_delay);
        }
        Ok(frame)
    }

    fn blend_into<const N: usize>(
        frame: &mut [Rgb; N],
        source: &[Rgb; N],
        destination: &[Rgb; N],
        amount: u8,
    ) {
        for ((pixel, from), to) in frame.iter_mut().zip(source).zip(destination) {
            *pixel = lerp(*from, *to, amount);
        }
    }
}
