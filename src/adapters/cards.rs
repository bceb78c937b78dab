use crate::domain::model::CardRecord;
use crate::domain::ports::CardSource;
use crate::utils::error::{Result, TarotError};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads every `*.json` document from a directory of card files. The image
/// reference is derived from the file stem (`{images_subpath}/{stem}.jpg`),
/// matching the layout the collaborator's static file server exposes.
#[derive(Debug, Clone)]
pub struct CardDirectory {
    dir: PathBuf,
    images_subpath: String,
}

impl CardDirectory {
    pub fn new(dir: impl Into<PathBuf>, images_subpath: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            images_subpath: images_subpath.into(),
        }
    }
}

impl CardSource for CardDirectory {
    fn load_cards(&self) -> Result<Vec<CardRecord>> {
        if !self.dir.is_dir() {
            return Err(TarotError::CatalogError {
                message: format!("card directory not found: {}", self.dir.display()),
            });
        }

        let mut cards = Vec::new();
        let mut entries: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        entries.sort();

        for path in entries {
            let card = read_card(&path, &self.images_subpath)?;
            cards.push(card);
        }

        tracing::debug!("Loaded {} card documents from {}", cards.len(), self.dir.display());
        Ok(cards)
    }
}

fn read_card(path: &Path, images_subpath: &str) -> Result<CardRecord> {
    let raw = fs::read_to_string(path)?;
    let mut card: CardRecord =
        serde_json::from_str(&raw).map_err(|e| TarotError::CatalogError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TarotError::CatalogError {
            message: format!("invalid card filename: {}", path.display()),
        })?;
    card.image_url = format!("{}/{}.jpg", images_subpath, stem);

    Ok(card)
}
