//! 周期计时器：在 UI 线程上按截止时间轮询，不另开线程

use std::time::{Duration, Instant};

/// 表盘刷新周期
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// 到期则返回 true 并排下一次；落后多个周期时只触发一次
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else { return false };
        if now < due {
            return false;
        }
        let mut next = due + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next_due = Some(next);
        true
    }

    /// 距下次触发的时间；已停止返回 None
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
