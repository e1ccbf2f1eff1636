use std::time::{Duration, Instant};

/// Runs `work`, hands the elapsed wall-clock time to `hook`, and returns
/// whatever `work` produced. The hook is called exactly once.
pub fn timed<R, W, H>(work: W, hook: H) -> R
where
    W: FnOnce() -> R,
    H: FnOnce(Duration),
{
    let start = Instant::now();
    let result = work();
    hook(start.elapsed());
    result
}
