//! Background music on/off switch. The web layer owns the audio element.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicCommand {
    Play,
    Pause,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MusicToggle {
    playing: bool,
}

impl MusicToggle {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip the state and say what the audio element should do.
    pub fn toggle(&mut self) -> MusicCommand {
        self.playing = !self.playing;
        let cmd = if self.playing {
            MusicCommand::Play
        } else {
            MusicCommand::Pause
        };
        log::info!("[music] {:?}", cmd);
        cmd
    }
}
