use mini_photoshop::{Error, ImageStore, PixelBuffer, Result};
use std::collections::HashMap;

/// In-memory [`ImageStore`]; names missing from the map fail to load and
/// names starting with `readonly/` fail to save.
#[derive(Default)]
pub struct MemStore {
    pub images: HashMap<String, PixelBuffer>,
    pub saves: Vec<String>,
}

impl MemStore {
    pub fn with(mut self, name: &str, image: PixelBuffer) -> Self {
        self.images.insert(name.to_string(), image);
        self
    }
}

fn not_found(name: &str) -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("no image named {name}"),
    ))
}

impl ImageStore for MemStore {
    fn load(&mut self, name: &str) -> Result<PixelBuffer> {
        self.images.get(name).cloned().ok_or_else(|| not_found(name))
    }

    fn save(&mut self, buffer: &PixelBuffer, name: &str) -> Result<()> {
        if name.starts_with("readonly/") {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("cannot write {name}"),
            )));
        }
        self.saves.push(name.to_string());
        self.images.insert(name.to_string(), buffer.clone());
        Ok(())
    }
}
