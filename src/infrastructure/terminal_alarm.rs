// Terminal alarm - Rings the terminal bell on a loop while active
use crate::application::ports::{Alarm, AlarmError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

const BELL: &[u8] = b"\x07";

pub struct TerminalAlarm {
    ring_interval: Duration,
    rings: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TerminalAlarm {
    pub fn new(ring_interval: Duration) -> Self {
        Self {
            ring_interval,
            rings: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    #[cfg(test)]
    fn rings(&self) -> u64 {
        self.rings.load(Ordering::Relaxed)
    }
}

impl Alarm for TerminalAlarm {
    fn start(&self) -> Result<(), AlarmError> {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return Ok(());
        }

        let runtime = Handle::try_current().map_err(|e| AlarmError::Unavailable(e.to_string()))?;
        let rings = self.rings.clone();
        let period = self.ring_interval;

        *task = Some(runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            let mut out = tokio::io::stderr();
            loop {
                ticker.tick().await;
                rings.fetch_add(1, Ordering::Relaxed);
                if let Err(e) = ring(&mut out).await {
                    tracing::warn!(error = %e, "terminal bell unavailable, alarm muted");
                    break;
                }
            }
        }));
        tracing::debug!("alarm started");
        Ok(())
    }

    fn stop(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
            tracing::debug!("alarm stopped");
        }
    }

    fn is_active(&self) -> bool {
        let task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        task.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

async fn ring<W: AsyncWrite + Unpin>(out: &mut W) -> std::io::Result<()> {
    out.write_all(BELL).await?;
    out.flush().await
}

impl Drop for TerminalAlarm {
    fn drop(&mut self) {
        self.stop();
    }
}
