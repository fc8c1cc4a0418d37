/// Playback flags and the audio-unlock state machine.
///
/// Pause and mute are independent pure toggles with no history. Pausing
/// only suppresses the orbital advance step; camera damping and rendering
/// continue. Mute is mirrored onto the host audio element via a UI event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Playback {
    pub paused: bool,
    pub muted: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the paused bit. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Flip the muted bit. Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// Browser autoplay policy blocks audio until a user gesture. Only the
/// first click anywhere counts: it fires exactly one play request, and the
/// machine never re-arms — if that single attempt is rejected the track
/// stays silent for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioUnlock {
    Locked,
    Unlocked,
}

impl AudioUnlock {
    pub fn new() -> Self {
        AudioUnlock::Locked
    }

    /// Record a user click. Returns true exactly once, on the transition
    /// from Locked to Unlocked, signalling the host to start playback.
    pub fn notify_click(&mut self) -> bool {
        match self {
            AudioUnlock::Locked => {
                *self = AudioUnlock::Unlocked;
                true
            }
            AudioUnlock::Unlocked => false,
        }
    }
}

impl Default for AudioUnlock {
    fn default() -> Self {
        Self::new()
    }
}
