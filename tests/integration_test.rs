//! Integration Tests - End-to-end Slot Persistence
//!
//! Exercises the file-backed store through the facade in a temporary
//! data directory, and the store's error handling against a mocked
//! artifact backend (mockall).

use std::fs;
use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mockall::mock;
use serde::{Deserialize, Serialize};

use slotvault::adapters::persistence::{
    ArtifactCipher, FileArtifactStorage, JsonCodec, PersistenceStore,
};
use slotvault::config::PersistenceConfig;
use slotvault::domain::{Saveable, SlotKey, TimeData};
use slotvault::error::PersistError;
use slotvault::ports::artifact_storage::ArtifactStorage;
use slotvault::ports::slot_repository::SlotRepository;
use slotvault::usecases::PersistenceFacade;

const TIME_DATA_FILE: &str =
    "5ce812753a76e4c9ae7d2ed907e04ef0e14b39038253eaf92c36cb87689879a9.json";
const TIME_DATA_ARTIFACT: &str =
    "/2mcvSsl/oX1Lw/49a7jP4bnjxserC83vQ4h5LXIoOjqFnlRKWotmh9rEVfNj7JA";
/// `{"<Minute>k__BackingField":30,"<Hours>k__BackingField":14,"<Days>k__BackingField":5}`
/// under the legacy key, as earlier builds wrote it.
const EARLIER_BUILD_ARTIFACT: &str = "b4Gbzm966UljdaYj+OAoOR0xjgCLd9eZrJRY89Rw99A2f5pvKYxrYYy04wxhJPk/mhAh6+R7eTiyHmZgBONmkg5WIbJGPML+35+oZsJG46tROt1tfMJ+kIlN/UMxsyfQ";

// ---- Mock Definitions ----

mock! {
    pub Storage {}

    impl ArtifactStorage for Storage {
        fn read(&self, key: &SlotKey) -> Result<Option<Vec<u8>>, PersistError>;
        fn write(&self, key: &SlotKey, artifact: &str) -> Result<(), PersistError>;
        fn contains(&self, key: &SlotKey) -> bool;
    }
}

// ---- Fixtures ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AudioSettings {
    master_volume: f32,
    muted: bool,
    device: Option<String>,
}

impl Saveable for AudioSettings {
    const SLOT_NAME: &'static str = "AudioSettings";
}

type FileFacade = PersistenceFacade<PersistenceStore>;

fn file_facade(data_dir: &Path) -> FileFacade {
    let config = PersistenceConfig {
        data_dir: data_dir.display().to_string(),
        key: None,
        iv: None,
    };
    let store = PersistenceStore::from_config(&config).expect("store");
    PersistenceFacade::new(Arc::new(store))
}

fn mock_store(storage: MockStorage) -> PersistenceStore<MockStorage> {
    PersistenceStore::new(storage, ArtifactCipher::legacy(), JsonCodec)
}

// ---- File-backed scenarios ----

#[test]
fn test_time_data_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("persistent");
    let facade = file_facade(&data_dir);

    assert!(!facade.exists::<TimeData>());
    assert_eq!(facade.load::<TimeData>().unwrap(), None);

    facade.save(&TimeData::new(30, 14, 5)).unwrap();

    let path = data_dir.join(TIME_DATA_FILE);
    assert!(path.is_file());
    assert_eq!(fs::read_to_string(&path).unwrap(), TIME_DATA_ARTIFACT);
    assert!(facade.exists::<TimeData>());
    assert_eq!(
        facade.load::<TimeData>().unwrap(),
        Some(TimeData::new(30, 14, 5))
    );

    fs::remove_file(&path).unwrap();
    assert!(!facade.exists::<TimeData>());
    assert_eq!(facade.load::<TimeData>().unwrap(), None);
}

#[test]
fn test_reads_artifact_written_by_earlier_build() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(TIME_DATA_FILE), EARLIER_BUILD_ARTIFACT).unwrap();

    let facade = file_facade(dir.path());
    assert_eq!(
        facade.load::<TimeData>().unwrap(),
        Some(TimeData::new(30, 14, 5))
    );
}

#[test]
fn test_overwrite_keeps_single_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let facade = file_facade(dir.path());

    facade.save(&TimeData::new(1, 1, 1)).unwrap();
    facade.save(&TimeData::new(2, 2, 2)).unwrap();

    assert_eq!(
        facade.load::<TimeData>().unwrap(),
        Some(TimeData::new(2, 2, 2))
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_type_isolation_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let facade = file_facade(dir.path());
    let settings = AudioSettings {
        master_volume: 0.8,
        muted: false,
        device: Some("default".into()),
    };

    facade.save(&settings).unwrap();
    assert!(!facade.exists::<TimeData>());
    assert_eq!(facade.load::<TimeData>().unwrap(), None);

    facade.save(&TimeData::new(3, 4, 5)).unwrap();
    assert_eq!(facade.load::<AudioSettings>().unwrap(), Some(settings));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_truncated_artifact_is_decrypt_error() {
    let dir = tempfile::tempdir().unwrap();
    let facade = file_facade(dir.path());
    facade.save(&TimeData::new(30, 14, 5)).unwrap();

    let path = dir.path().join(TIME_DATA_FILE);
    let mut bytes = STANDARD.decode(fs::read_to_string(&path).unwrap()).unwrap();
    bytes.truncate(bytes.len() - 5);
    fs::write(&path, STANDARD.encode(&bytes)).unwrap();

    let err = facade.load::<TimeData>().unwrap_err();
    assert!(matches!(err, PersistError::Decrypt { .. }), "got {err}");
}

#[test]
fn test_flipped_padding_is_decrypt_error() {
    let dir = tempfile::tempdir().unwrap();
    let facade = file_facade(dir.path());
    facade.save(&TimeData::new(30, 14, 5)).unwrap();

    // Flipping the last byte of the second-to-last ciphertext block flips
    // the final padding byte of the plaintext to a value above 16.
    let path = dir.path().join(TIME_DATA_FILE);
    let mut bytes = STANDARD.decode(fs::read_to_string(&path).unwrap()).unwrap();
    let idx = bytes.len() - 17;
    bytes[idx] ^= 0xFF;
    fs::write(&path, STANDARD.encode(&bytes)).unwrap();

    let err = facade.load::<TimeData>().unwrap_err();
    assert!(matches!(err, PersistError::Decrypt { .. }), "got {err}");
}

#[test]
fn test_flipped_file_byte_is_decrypt_error() {
    let dir = tempfile::tempdir().unwrap();
    let facade = file_facade(dir.path());
    facade.save(&TimeData::new(30, 14, 5)).unwrap();

    // The file is no longer valid UTF-8 after this flip.
    let path = dir.path().join(TIME_DATA_FILE);
    let mut raw = fs::read(&path).unwrap();
    let idx = raw.len() - 3;
    raw[idx] ^= 0xFF;
    fs::write(&path, &raw).unwrap();

    let err = facade.load::<TimeData>().unwrap_err();
    assert!(matches!(err, PersistError::Decrypt { .. }), "got {err}");
}

#[test]
fn test_custom_key_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = PersistenceConfig {
        data_dir: dir.path().display().to_string(),
        key: Some("abcdefghijklmnop".into()),
        iv: Some("ponmlkjihgfedcba".into()),
    };
    let facade = PersistenceFacade::new(Arc::new(PersistenceStore::from_config(&config).unwrap()));

    facade.save(&TimeData::new(30, 14, 5)).unwrap();
    let written = fs::read_to_string(dir.path().join(TIME_DATA_FILE)).unwrap();
    assert_ne!(written, TIME_DATA_ARTIFACT);
    assert_eq!(
        facade.load::<TimeData>().unwrap(),
        Some(TimeData::new(30, 14, 5))
    );
}

#[test]
fn test_store_path_matches_slot_key() {
    let storage = FileArtifactStorage::new("saves");
    let path = storage.path_for(&SlotKey::of::<TimeData>());
    assert_eq!(path, Path::new("saves").join(TIME_DATA_FILE));
}

// ---- Mocked backend ----

#[test]
fn test_save_writes_encrypted_artifact_to_type_slot() {
    let mut storage = MockStorage::new();
    storage
        .expect_write()
        .withf(|key, artifact| key.file_name() == TIME_DATA_FILE && artifact == TIME_DATA_ARTIFACT)
        .times(1)
        .returning(|_, _| Ok(()));

    mock_store(storage).save(&TimeData::new(30, 14, 5)).unwrap();
}

#[test]
fn test_read_failure_surfaces_as_io() {
    let mut storage = MockStorage::new();
    storage.expect_read().times(1).returning(|key| {
        Err(PersistError::io(
            key.file_name(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    });

    let err = mock_store(storage).load::<TimeData>().unwrap_err();
    assert!(matches!(err, PersistError::Io { .. }));
}

#[test]
fn test_exists_only_checks_presence() {
    let mut storage = MockStorage::new();
    storage
        .expect_contains()
        .withf(|key| key.name() == "AudioSettings")
        .times(1)
        .return_const(false);
    storage.expect_read().never();

    assert!(!mock_store(storage).exists::<AudioSettings>());
}

#[test]
fn test_serialize_failure_never_touches_storage() {
    #[derive(Serialize, Deserialize)]
    struct BadKeys(std::collections::HashMap<Vec<u8>, u8>);

    impl Saveable for BadKeys {
        const SLOT_NAME: &'static str = "BadKeys";
    }

    let mut storage = MockStorage::new();
    storage.expect_write().never();

    let mut map = std::collections::HashMap::new();
    map.insert(vec![1u8], 1u8);
    let err = mock_store(storage).save(&BadKeys(map)).unwrap_err();
    assert!(matches!(err, PersistError::Serialize { .. }));
}
