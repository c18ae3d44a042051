//! Upload Progress
//!
//! 読み出したバイト数を進捗バーに反映するリーダー
//!
//! 進捗バーを作れない場合（stat失敗など）は警告を出し、元のリーダーをそのまま使う。

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressFinish, ProgressStyle};
use log::warn;
use std::io;
use tokio::io::AsyncRead;

use crate::domain::repositories::media_repository::MediaReader;

/// bytes transferred, throughput and ETA
pub const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

/// 進捗の表示先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    /// 標準出力に描画
    #[default]
    Stdout,
    /// 描画しない（位置は追跡する）
    Hidden,
}

impl ProgressMode {
    fn draw_target(self) -> ProgressDrawTarget {
        match self {
            ProgressMode::Stdout => ProgressDrawTarget::stdout(),
            ProgressMode::Hidden => ProgressDrawTarget::hidden(),
        }
    }
}

/// 進捗付き（または素の）リーダー
pub struct ObservedReader {
    pub reader: MediaReader,
    /// 既知の合計バイト数
    pub total: Option<u64>,
    /// 進捗バー（作成できなかった場合は None）
    pub progress: Option<ProgressBar>,
}

/// バイト単位の進捗バーを作成
pub fn byte_progress_bar(total: u64, mode: ProgressMode) -> Result<ProgressBar, String> {
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .map_err(|e| e.to_string())?
        .progress_chars("##-");

    Ok(ProgressBar::with_draw_target(Some(total), mode.draw_target())
        .with_style(style)
        .with_finish(ProgressFinish::AndLeave))
}

/// リーダーを進捗バーで包む
///
/// # Arguments
///
/// * `reader` - 元のリーダー
/// * `total` - 合計バイト数（statの結果）
/// * `mode` - 表示先
pub fn observe_reader<R>(reader: R, total: io::Result<u64>, mode: ProgressMode) -> ObservedReader
where
    R: AsyncRead + Unpin + Send + Sync + 'static,
{
    let total = match total {
        Ok(total) => total,
        Err(e) => {
            report_fallback(&format!("could not stat: {}", e));
            return plain(reader, None);
        }
    };

    match byte_progress_bar(total, mode) {
        Ok(bar) => ObservedReader {
            reader: Box::pin(bar.wrap_async_read(reader)),
            total: Some(total),
            progress: Some(bar),
        },
        Err(e) => {
            report_fallback(&e);
            plain(reader, Some(total))
        }
    }
}

/// 進捗なしで続行することを利用者に知らせる
fn report_fallback(reason: &str) {
    warn!("could not create progress bar: {}", reason);
    // RUST_LOG 未設定でも見えるようにする
    println!("⚠ Progress unavailable ({}), uploading without it", reason);
}

fn plain<R>(reader: R, total: Option<u64>) -> ObservedReader
where
    R: AsyncRead + Unpin + Send + Sync + 'static,
{
    ObservedReader {
        reader: Box::pin(reader),
        total,
        progress: None,
    }
}
