use std::time::Instant;

/// A kernel output paired with how long the kernel took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    /// Milliseconds on a monotonic clock. Never negative.
    pub elapsed_ms: f64,
    pub output: T,
}

/// Run `f`, measuring from immediately before the call to immediately after it returns.
#[inline]
pub fn timed<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    Timed { elapsed_ms, output }
}

impl<T> Timed<T> {
    #[inline]
    pub fn map<U, F>(self, f: F) -> Timed<U>
    where
        F: FnOnce(T) -> U,
    {
        Timed {
            elapsed_ms: self.elapsed_ms,
            output: f(self.output),
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Move a failed kernel's error out, dropping the measurement.
    #[inline]
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed_ms = self.elapsed_ms;
        self.output.map(|output| Timed { elapsed_ms, output })
    }
}
