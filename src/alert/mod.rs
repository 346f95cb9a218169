//! Ship sighting alerts: tone, console line and spoken summary

pub mod record;
pub mod summary;
pub mod tone;

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::ToneConfig;
use crate::error::Result;
use crate::playback::Player;
use crate::speech::Synthesizer;

pub use record::ShipRecord;
pub use summary::{course_phrase, sightings_phrase, speed_phrase, summary_sentence};
pub use tone::ToneCategory;

/// Runs each alert to completion: tone, then speech
pub struct Alerter<S, P> {
    synthesizer: S,
    player: P,
    tones: ToneConfig,
}

impl<S: Synthesizer, P: Player> Alerter<S, P> {
    pub fn new(synthesizer: S, player: P, tones: ToneConfig) -> Self {
        Self {
            synthesizer,
            player,
            tones,
        }
    }

    /// Announce a sighting
    ///
    /// Tone and speech playback failures are logged and skipped; synthesis
    /// failures are returned.
    pub fn alert(&self, record: &ShipRecord) -> Result<()> {
        write_console(&record.console_line(&chrono::Local::now()));

        let category = ToneCategory::classify(&record.ship_type);
        let tone = self.tones.path_for(category);
        debug!("{:?} tone for {}: {}", category, record.name, tone.display());
        if let Err(e) = self.player.play_file(tone) {
            warn!("Skipping alert tone {}: {}", tone.display(), e);
        }

        let sentence = summary_sentence(record);
        let audio = self.synthesizer.synthesize(&sentence)?;
        if let Err(e) = self.player.play_bytes(&audio) {
            warn!("Skipping speech for {}: {}", record.name, e);
        }

        info!("Alert complete for {} (MMSI {})", record.name, record.mmsi);
        Ok(())
    }

    /// Speak `text` and wait for playback to finish
    pub fn say(&self, text: &str) -> Result<()> {
        let audio = self.synthesizer.synthesize(text)?;
        self.player.play_bytes(&audio)?;
        Ok(())
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

fn write_console(line: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", line);
    let _ = stdout.flush();
}
