use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::utils::settings::SettingsError;
use crate::world::state::{FlatWorld, WorldError};

const MAGIC_HEADER: &[u8; 4] = b"SCWD";
const VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWorld {
    pub seed: u64,
    pub world: FlatWorld,
    pub player_x: f32,
    pub player_y: f32,
    pub health: i32,
    pub inventory: Vec<u32>,
    pub selected_slot: usize,
}

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Encoding(bincode::Error),
    BadMagic,
    UnsupportedVersion(u32),
    World(WorldError),
    Settings(SettingsError),
    Inventory,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "save file error: {}", e),
            SaveError::Encoding(e) => write!(f, "save encoding error: {}", e),
            SaveError::BadMagic => write!(f, "not a world save file"),
            SaveError::UnsupportedVersion(v) => write!(f, "unsupported save version: {}", v),
            SaveError::World(e) => write!(f, "corrupt world data: {}", e),
            SaveError::Settings(e) => write!(f, "save does not fit the settings: {}", e),
            SaveError::Inventory => write!(f, "corrupt inventory data"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Encoding(e) => Some(e),
            SaveError::World(e) => Some(e),
            SaveError::Settings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bincode::Error> for SaveError {
    fn from(e: bincode::Error) -> Self {
        SaveError::Encoding(e)
    }
}

impl From<SettingsError> for SaveError {
    fn from(e: SettingsError) -> Self {
        SaveError::Settings(e)
    }
}

impl From<WorldError> for SaveError {
    fn from(e: WorldError) -> Self {
        SaveError::World(e)
    }
}

pub fn write_world<W: Write>(mut writer: W, world: &SavedWorld) -> Result<(), SaveError> {
    writer.write_all(MAGIC_HEADER)?;
    writer.write_all(&VERSION.to_le_bytes())?;

    let data = bincode::serialize(world)?;
    writer.write_all(&(data.len() as u64).to_le_bytes())?;
    writer.write_all(&data)?;
    writer.flush()?;
    Ok(())
}

pub fn read_world<R: Read>(mut reader: R) -> Result<SavedWorld, SaveError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC_HEADER {
        return Err(SaveError::BadMagic);
    }

    let mut version_bytes = [0u8; 4];
    reader.read_exact(&mut version_bytes)?;
    let version = u32::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(SaveError::UnsupportedVersion(version));
    }

    let mut size_bytes = [0u8; 8];
    reader.read_exact(&mut size_bytes)?;
    let size = u64::from_le_bytes(size_bytes);

    let mut data = Vec::new();
    reader.take(size).read_to_end(&mut data)?;
    if data.len() as u64 != size {
        return Err(SaveError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("payload truncated: {} of {} bytes", data.len(), size),
        )));
    }

    Ok(bincode::deserialize(&data)?)
}

pub fn save_world<P: AsRef<Path>>(path: P, world: &SavedWorld) -> Result<(), SaveError> {
    let file = File::create(path.as_ref())?;
    write_world(BufWriter::new(file), world)?;
    tracing::info!("World saved to {}", path.as_ref().display());
    Ok(())
}

pub fn load_world<P: AsRef<Path>>(path: P) -> Result<SavedWorld, SaveError> {
    let file = File::open(path.as_ref())?;
    let world = read_world(BufReader::new(file))?;
    tracing::info!("World loaded from {}", path.as_ref().display());
    Ok(world)
}

pub const DEFAULT_WORLD_FILE: &str = "world.scw";
