//! Integration tests for shipspeak

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use shipspeak::credentials::{self, InlineSecret, Provisioner};
use shipspeak::{
    AlertError, Alerter, Config, CredentialError, GoogleTts, PlaybackError, Player, Sanitizer,
    ShipRecord, SpeechError, Synthesizer, ToneConfig,
};

/// Blob sealing "bar" under the passphrase "foo"
const SAMPLE_BLOB: &str = "hlwjlfFMLUIWbbjyphbr4b1mbCsGYS3Ciy4gXvSnZg==";

#[derive(Default)]
struct RecordingSynthesizer {
    requests: RefCell<Vec<String>>,
    fail: bool,
}

impl Synthesizer for RecordingSynthesizer {
    fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        self.requests.borrow_mut().push(text.to_string());
        if self.fail {
            return Err(SpeechError::Network("connection refused".to_string()));
        }
        Ok(format!("audio:{}", text).into_bytes())
    }
}

#[derive(Default)]
struct RecordingPlayer {
    files: RefCell<Vec<PathBuf>>,
    clips: RefCell<Vec<Vec<u8>>>,
    fail_files: bool,
    fail_clips: bool,
}

impl Player for RecordingPlayer {
    fn play_file(&self, path: &Path) -> Result<(), PlaybackError> {
        self.files.borrow_mut().push(path.to_path_buf());
        if self.fail_files {
            return Err(PlaybackError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        Ok(())
    }

    fn play_bytes(&self, bytes: &[u8]) -> Result<(), PlaybackError> {
        self.clips.borrow_mut().push(bytes.to_vec());
        if self.fail_clips {
            return Err(PlaybackError::Decode("bad clip".to_string()));
        }
        Ok(())
    }
}

fn tanker() -> ShipRecord {
    ShipRecord {
        mmsi: 636019825,
        name: "NORDIC_ZENITH".to_string(),
        ship_type: "Tanker - Hazard B".to_string(),
        course: 12.6,
        speed: 11.0,
        sightings: 1,
    }
}

#[test]
fn test_provision_rejects_empty_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gcp_auth.json");
    let provisioner = Provisioner::new(&path);

    let result = provisioner.provision(&InlineSecret(String::new()), "");

    assert!(matches!(result, Err(CredentialError::Decrypt(_))));
    assert!(provisioner.credentials().is_none());
    assert!(!path.exists());
}

#[test]
fn test_provision_writes_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gcp_auth.json");

    let creds = credentials::provision(SAMPLE_BLOB, "foo", &path).unwrap();

    assert!(!creds.path().as_os_str().is_empty());
    assert_eq!(creds.path(), path.as_path());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bar\n");
}

#[test]
fn test_provision_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gcp_auth.json");
    std::fs::write(&path, "a much longer stale document\n").unwrap();

    credentials::provision(SAMPLE_BLOB, "foo", &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bar\n");
}

#[test]
fn test_provisioner_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gcp_auth.json");
    let provisioner = Provisioner::new(&path);

    let first = provisioner
        .provision(&InlineSecret(SAMPLE_BLOB.to_string()), "foo")
        .unwrap();
    std::fs::write(&path, "touched\n").unwrap();

    // A second call hands back the same handle without decrypting or writing
    let second = provisioner
        .provision(&InlineSecret(SAMPLE_BLOB.to_string()), "wrong")
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(provisioner.credentials(), Some(&first));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "touched\n");
}

#[test]
fn test_provision_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let blob_path = dir.path().join("secret.b64");
    let creds_path = dir.path().join("auth.json");
    let config_path = dir.path().join("shipspeak.toml");

    std::fs::write(&blob_path, format!("{}\n", SAMPLE_BLOB)).unwrap();
    std::fs::write(
        &config_path,
        format!(
            "[credentials]\nciphertext_file = {:?}\npath = {:?}\n",
            blob_path, creds_path
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let source = credentials::secret::from_config(&config.credentials).unwrap();
    let provisioner = Provisioner::new(config.credentials.output_path());
    let creds = provisioner.provision(source.as_ref(), "foo").unwrap();

    assert_eq!(creds.path(), creds_path.as_path());
    assert_eq!(std::fs::read_to_string(&creds_path).unwrap(), "bar\n");
}

#[test]
fn test_alert_plays_tone_then_speech() {
    let tones = ToneConfig::default();
    let alerter = Alerter::new(
        RecordingSynthesizer::default(),
        RecordingPlayer::default(),
        tones.clone(),
    );

    alerter.alert(&tanker()).unwrap();

    assert_eq!(*alerter.player().files.borrow(), vec![tones.tanker.clone()]);
    assert_eq!(
        *alerter.synthesizer().requests.borrow(),
        vec!["NORDIC_ZENITH, Tanker - Hazard B, course 13 degrees, speed 11 knots, one previous sighting."
            .to_string()]
    );
    assert_eq!(alerter.player().clips.borrow().len(), 1);
}

#[test]
fn test_alert_unknown_type_uses_generic_tone() {
    let tones = ToneConfig::default();
    let alerter = Alerter::new(
        RecordingSynthesizer::default(),
        RecordingPlayer::default(),
        tones.clone(),
    );

    let record = ShipRecord {
        ship_type: "Dredging".to_string(),
        ..tanker()
    };
    alerter.alert(&record).unwrap();

    assert_eq!(*alerter.player().files.borrow(), vec![tones.generic.clone()]);
}

#[test]
fn test_alert_continues_after_tone_failure() {
    let player = RecordingPlayer {
        fail_files: true,
        ..Default::default()
    };
    let alerter = Alerter::new(RecordingSynthesizer::default(), player, ToneConfig::default());

    alerter.alert(&tanker()).unwrap();

    assert_eq!(alerter.synthesizer().requests.borrow().len(), 1);
    assert_eq!(alerter.player().clips.borrow().len(), 1);
}

#[test]
fn test_alert_skips_bad_speech_clip() {
    let player = RecordingPlayer {
        fail_clips: true,
        ..Default::default()
    };
    let alerter = Alerter::new(RecordingSynthesizer::default(), player, ToneConfig::default());

    assert!(alerter.alert(&tanker()).is_ok());
}

#[test]
fn test_alert_returns_synthesis_failure() {
    let synthesizer = RecordingSynthesizer {
        fail: true,
        ..Default::default()
    };
    let alerter = Alerter::new(synthesizer, RecordingPlayer::default(), ToneConfig::default());

    let result = alerter.alert(&tanker());

    assert!(matches!(result, Err(AlertError::Speech(SpeechError::Network(_)))));
    assert_eq!(alerter.player().files.borrow().len(), 1);
    assert!(alerter.player().clips.borrow().is_empty());
}

#[test]
fn test_say_propagates_playback_failure() {
    let player = RecordingPlayer {
        fail_clips: true,
        ..Default::default()
    };
    let alerter = Alerter::new(RecordingSynthesizer::default(), player, ToneConfig::default());

    let result = alerter.say("hello");

    assert!(matches!(result, Err(AlertError::Playback(PlaybackError::Decode(_)))));
    assert_eq!(*alerter.synthesizer().requests.borrow(), vec!["hello".to_string()]);
}

#[test]
fn test_say_without_credentials() {
    let config = Config::default();
    let tts = GoogleTts::new(
        config.speech.clone(),
        Sanitizer::new(config.text.corrections.clone()),
        None,
    )
    .unwrap();
    let alerter = Alerter::new(tts, RecordingPlayer::default(), config.alert.tones.clone());

    let result = alerter.say("hello");

    assert!(matches!(result, Err(AlertError::Speech(SpeechError::NotProvisioned))));
    assert!(alerter.player().clips.borrow().is_empty());
}
