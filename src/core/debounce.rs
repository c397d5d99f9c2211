use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// 默认防抖时间
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// 可取消的延迟执行器
///
/// 每次 `trigger` 都会取消尚未执行的动作并重新计时，
/// 只有在静默期结束后最后一次触发的动作才会执行。
/// 必须在 tokio 运行时内使用。
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 安排动作在静默期后执行，取消之前未执行的动作
    pub fn trigger<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            debug!("Debounced action superseded");
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// 取消未执行的动作，返回是否确实取消了一个动作
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let active = !handle.is_finished();
                handle.abort();
                active
            }
            None => false,
        }
    }

    /// 是否有等待执行的动作
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce() + Send>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        let make = move |value: &str| -> Box<dyn FnOnce() + Send> {
            let log = log_clone.clone();
            let value = value.to_string();
            Box::new(move || log.lock().unwrap().push(value))
        };
        (log, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_trigger_runs() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::default();

        debouncer.trigger(make("i"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.trigger(make("ir"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.trigger(make("irr"));
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*log.lock().unwrap(), vec!["irr".to_string()]);
        assert!(!debouncer.is_pending());

        debouncer.trigger(make("soil"));
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*log.lock().unwrap(), vec!["irr".to_string(), "soil".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let (log, make) = recorder();
        let mut debouncer = Debouncer::from_millis(50);

        debouncer.trigger(make("x"));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(log.lock().unwrap().is_empty());
    }
}
