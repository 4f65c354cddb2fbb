/// Native table for frontend sounds and scripted music events.
pub trait AudioNatives {
    /// `sound_id` of -1 plays a one-shot sound the script never addresses
    /// again.
    fn play_sound_frontend(&self, sound_id: i32, sound_file: &str, sound_set: &str, p3: bool);
    fn trigger_music_event(&self, event: &str);
    fn cancel_music_event(&self, event: &str);
}
