//! Runs independent per-document jobs, on the rayon pool when the `parallel`
//! feature is enabled and sequentially otherwise.

#[cfg(feature = "parallel")]
pub(crate) fn execute_all<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn execute_all<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
{
    items.iter().map(f).collect()
}
