//! Batch download of search results.

use std::io::Write;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::api::{Item, SearchApi, SearchResults};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::item_path;
use crate::output::Bar;

/// Permission bits for downloaded files, before the umask.
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

/// Download every item in `results`, in order, into `output_dir`.
///
/// Progress lines are written to `progress`. The first failure aborts the
/// batch; files written before it are left in place.
pub async fn download_results<W: Write>(
    api: &SearchApi,
    config: &Config,
    results: &SearchResults,
    output_dir: &Path,
    progress: &mut W,
) -> Result<Vec<PathBuf>> {
    let total = results.len() as u64;
    let mut bar = Bar::new(0, total);
    let mut written = Vec::with_capacity(results.len());

    tracing::info!("Downloading {} file(s) to {}", total, output_dir.display());

    for (index, item) in results.data.iter().enumerate() {
        let path = download_item(api, config, item, output_dir).await?;
        written.push(path);

        let line = bar.play(index as u64, &item.id);
        progress.write_all(line.as_bytes())?;
        progress.flush()?;
    }

    progress.write_all(bar.finish().as_bytes())?;
    progress.flush()?;

    Ok(written)
}

/// Download a single item and return the path it was written to.
///
/// The body is streamed into a `.<id>.part` file next to the target and
/// renamed over `<dir>/<id>` only once it has been read completely.
pub async fn download_item(
    api: &SearchApi,
    config: &Config,
    item: &Item,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_path = item_path(output_dir, &item.id)?;
    let part_path = output_dir.join(format!(".{}.part", item.id));
    let url = config.download_url(&item.id)?;

    let response = api.fetch(&url).await?;

    let downloaded = match write_part(response, &part_path, &item.id).await {
        Ok(downloaded) => downloaded,
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(&part_path).await {
                tracing::debug!("Could not remove {}: {}", part_path.display(), remove_err);
            }
            return Err(e);
        }
    };

    tokio::fs::rename(&part_path, &output_path)
        .await
        .map_err(|e| Error::Download(format!("Can not save file {}: {}", item.id, e)))?;

    tracing::debug!("Saved {} ({} bytes)", output_path.display(), downloaded);

    Ok(output_path)
}

/// Stream the response body into `part_path`, returning the byte count.
async fn write_part(response: reqwest::Response, part_path: &Path, id: &str) -> Result<u64> {
    let mut file = open_output(part_path)
        .await
        .map_err(|e| Error::Download(format!("Can not save file {}: {}", id, e)))?;

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::Download(format!("Can not save file {}: {}", id, e)))?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(downloaded)
}

/// Create or truncate the output file.
async fn open_output(path: &Path) -> std::io::Result<tokio::fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options.open(path).await
}
