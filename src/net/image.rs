//! Background poster loader.
//!
//! Grid cards and widgets reference poster URLs; the shell asks for them
//! here and picks up decoded RGBA buffers on later frames.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::time::Duration;

/// Posters wider than this are scaled down before upload.
pub const MAX_POSTER_WIDTH: u32 = 400;

/// Decoded poster (RGBA8).
pub struct Poster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Tracks in-flight, loaded and failed poster downloads by URL.
pub struct PosterLoader {
    pending: HashMap<String, mpsc::Receiver<Option<Poster>>>,
    loaded: HashMap<String, Poster>,
    failed: HashSet<String>,
}

impl Default for PosterLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PosterLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Start downloading `url` unless it is empty, known, or already failed.
    /// Local asset paths (no scheme) are not fetched.
    pub fn request(&mut self, url: &str) {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return;
        }
        if self.loaded.contains_key(url)
            || self.pending.contains_key(url)
            || self.failed.contains(url)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();

        std::thread::spawn(move || {
            let _ = tx.send(fetch_and_decode(&url_owned));
        });

        self.pending.insert(url.to_string(), rx);
    }

    /// Move finished downloads out of the pending set. Call every frame.
    /// Returns the URLs that finished loading successfully.
    pub fn poll(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        let mut ready = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(poster)) => {
                    self.loaded.insert(url.clone(), poster);
                    ready.push(url.clone());
                    completed.push(url.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("poster failed: {}", url);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for url in completed {
            self.pending.remove(&url);
        }
        ready
    }

    pub fn get(&self, url: &str) -> Option<&Poster> {
        self.loaded.get(url)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn fetch_and_decode(url: &str) -> Option<Poster> {
    let resp = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .ok()?
        .get(url)
        .send()
        .ok()?;

    if !resp.status().is_success() {
        return None;
    }

    let bytes = resp.bytes().ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_POSTER_WIDTH {
        let ratio = MAX_POSTER_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_POSTER_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(Poster {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_deduplicates() {
        let mut loader = PosterLoader::new();
        loader.request("https://example.invalid/poster.jpg");
        loader.request("https://example.invalid/poster.jpg");
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn local_and_empty_paths_are_skipped() {
        let mut loader = PosterLoader::new();
        loader.request("");
        loader.request("/images/steins.jpg");
        assert_eq!(loader.pending_count(), 0);
    }
}
