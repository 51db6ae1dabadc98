//! JSON-backed asset store

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use heapless::String;

use marquee_core::surface::{Icon, Image};
use marquee_core::traits::{AssetError, AssetStore};

use crate::fmt::{debug, warn};
use crate::image::{decode_icon, decode_image};

/// Largest asset file accepted
///
/// A 32×32 image written by the converter is about 14 KiB.
pub const MAX_ASSET_LEN: usize = 24 * 1024;

/// Maximum length of an asset path
pub const PATH_LEN: usize = 64;

/// Raw byte source for asset files, e.g. a filesystem or flash partition
pub trait AssetSource {
    /// Read the file at `path` into `buf`, returning the number of bytes read
    ///
    /// Returns `TooLarge` if the file does not fit in `buf`.
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, AssetError>;
}

/// [`AssetStore`] reading `images/<name>.json` and `icons/<name>.json`
pub struct JsonAssetStore<S> {
    source: S,
    buf: Vec<u8>,
}

impl<S: AssetSource> JsonAssetStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: vec![0; MAX_ASSET_LEN],
        }
    }

    fn read(&mut self, dir: &str, name: &str) -> Result<&[u8], AssetError> {
        let mut path: String<PATH_LEN> = String::new();
        write!(path, "{}/{}.json", dir, name).map_err(|_| AssetError::NotFound)?;

        let len = self
            .source
            .read(&path, &mut self.buf)
            .inspect_err(|e| warn!("could not read {}: {}", path.as_str(), e))?;
        debug!("read {} ({} bytes)", path.as_str(), len);
        self.buf.get(..len).ok_or(AssetError::TooLarge)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: AssetSource> AssetStore for JsonAssetStore<S> {
    fn load_image(&mut self, name: &str) -> Result<Image, AssetError> {
        decode_image(self.read("images", name)?)
    }

    fn load_icon(&mut self, name: &str) -> Result<Icon, AssetError> {
        decode_icon(self.read("icons", name)?)
    }
}

/// Asset files under a root directory on the host filesystem
#[cfg(feature = "std")]
pub struct FsSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FsSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "std")]
impl AssetSource for FsSource {
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, AssetError> {
        let data = std::fs::read(self.root.join(path)).map_err(|_| AssetError::NotFound)?;
        let dst = buf.get_mut(..data.len()).ok_or(AssetError::TooLarge)?;
        dst.copy_from_slice(&data);
        Ok(data.len())
    }
}
