use rage_natives::AudioNatives;

/// Frontend sounds and scripted music events.
///
/// Music events are cancelled by name, so the last event triggered here
/// is remembered to give `stop_music(None)` something to cancel.
pub struct Audio<'n, N: ?Sized> {
    natives: &'n N,
    current_music: Option<String>,
}

impl<'n, N: ?Sized> Audio<'n, N> {
    pub fn new(natives: &'n N) -> Self {
        Self {
            natives,
            current_music: None,
        }
    }
}

impl<'n, N: AudioNatives + ?Sized> Audio<'n, N> {
    /// One-shot interface sound out of `sound_set`. Unaddressed sound id,
    /// so it cannot be stopped once started.
    pub fn play_sound(&self, sound_file: &str, sound_set: &str) {
        self.natives.play_sound_frontend(-1, sound_file, sound_set, false);
    }

    /// Trigger a music event, cancelling whichever event this wrapper
    /// triggered last.
    pub fn play_music(&mut self, music_file: &str) {
        if let Some(current) = self.current_music.take() {
            log::debug!("music event {} superseded by {}", current, music_file);
            self.natives.cancel_music_event(&current);
        }
        self.natives.trigger_music_event(music_file);
        self.current_music = Some(music_file.to_owned());
    }

    /// Cancel `music_file`, or with `None` whatever [`play_music`] last
    /// triggered (no-op if nothing is tracked).
    ///
    /// [`play_music`]: Audio::play_music
    pub fn stop_music(&mut self, music_file: Option<&str>) {
        match music_file {
            Some(file) => self.natives.cancel_music_event(file),
            None => {
                if let Some(current) = self.current_music.take() {
                    self.natives.cancel_music_event(&current);
                }
            }
        }
    }
}
