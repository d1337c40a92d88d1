//! Execution context and partitioned datasets.
//!
//! An [`ExecutionContext`] owns a dedicated `rayon` thread pool. Datasets
//! borrow the context, so the pool cannot be stopped while any dataset built
//! on it is still alive. Every operation runs on the context's pool; the
//! partition count is a tuning knob and never changes results.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::iter::Sum;
use std::str::FromStr;

use camino::Utf8Path;
use rayon::prelude::*;

use crate::error::{EngineError, EngineResult};

/// Address of the execution context.
///
/// Accepted forms: `local` (one worker), `local[N]` (N workers) and
/// `local[*]` (one worker per available core).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Master {
    /// A fixed number of worker threads.
    Local(usize),
    /// One worker per available core.
    LocalAll,
}

impl FromStr for Master {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMaster(s.to_string());
        let trimmed = s.trim();
        if trimmed == "local" {
            return Ok(Self::Local(1));
        }
        let inner = trimmed
            .strip_prefix("local[")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(invalid)?;
        if inner == "*" {
            return Ok(Self::LocalAll);
        }
        match inner.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self::Local(n)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Master {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(n) => write!(f, "local[{n}]"),
            Self::LocalAll => f.write_str("local[*]"),
        }
    }
}

/// A running execution context.
///
/// Create one per run with [`ExecutionContext::new`] and tear it down with
/// [`ExecutionContext::stop`].
#[derive(Debug)]
pub struct ExecutionContext {
    master: Master,
    pool: rayon::ThreadPool,
}

impl ExecutionContext {
    /// Start a worker pool for the given master address.
    #[tracing::instrument(fields(master = %master))]
    pub fn new(master: Master) -> EngineResult<Self> {
        let threads = match master {
            Master::Local(n) => n,
            // rayon picks one thread per core for zero
            Master::LocalAll => 0,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("dale-chall-worker-{i}"))
            .build()?;
        tracing::debug!(workers = pool.current_num_threads(), "execution context started");
        Ok(Self { master, pool })
    }

    /// The address this context was started with.
    pub const fn master(&self) -> Master {
        self.master
    }

    /// Number of worker threads in the pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Distribute `items` over `partitions` contiguous partitions.
    pub fn parallelize<T: Send>(
        &self,
        items: Vec<T>,
        partitions: usize,
    ) -> EngineResult<Dataset<'_, T>> {
        Ok(Dataset {
            ctx: self,
            partitions: split_into(items, partitions)?,
        })
    }

    /// Read a text file into a dataset with one element per line, spread
    /// over `partitions` partitions.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD. When `max_bytes` is set, files larger than the limit are rejected
    /// before they are read.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub fn text_file(
        &self,
        path: &Utf8Path,
        partitions: usize,
        max_bytes: Option<u64>,
    ) -> EngineResult<Dataset<'_, String>> {
        let read_err = |source: std::io::Error| EngineError::Read {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path.as_std_path())
            .map_err(read_err)?
            .len();
        if let Some(limit) = max_bytes
            && size > limit
        {
            return Err(EngineError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
        let bytes = std::fs::read(path.as_std_path()).map_err(read_err)?;
        let content = String::from_utf8_lossy(&bytes);
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        tracing::debug!(lines = lines.len(), bytes = size, "read text file");
        self.parallelize(lines, 1)?.repartition(partitions)
    }

    /// Shut the worker pool down.
    ///
    /// Consumes the context; the borrow checker guarantees no dataset
    /// outlives it.
    pub fn stop(self) {
        tracing::debug!(master = %self.master, "stopping execution context");
        drop(self.pool);
    }
}

/// Split `items` into exactly `n` contiguous partitions, sizes differing by at most one.
fn split_into<T>(items: Vec<T>, n: usize) -> EngineResult<Vec<Vec<T>>> {
    if n == 0 {
        return Err(EngineError::ZeroPartitions);
    }
    Ok(chunk(items, n))
}

/// [`split_into`] for a partition count already known to be non-zero.
fn chunk<T>(items: Vec<T>, n: usize) -> Vec<Vec<T>> {
    let base = items.len() / n;
    let extra = items.len() % n;
    let mut iter = items.into_iter();
    (0..n)
        .map(|i| {
            let len = base + usize::from(i < extra);
            iter.by_ref().take(len).collect::<Vec<T>>()
        })
        .collect()
}

/// Bucket index for `key` among `n` buckets.
fn bucket_of<K: Hash>(key: &K, n: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % n as u64) as usize
}

/// Fold `value` into `map` under `key`, combining with `f` on collision.
fn combine<K, V, F>(map: &mut HashMap<K, V>, key: K, value: V, f: &F)
where
    K: Hash + Eq,
    F: Fn(V, V) -> V,
{
    match map.entry(key) {
        Entry::Occupied(entry) => {
            let (key, existing) = entry.remove_entry();
            map.insert(key, f(existing, value));
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
    }
}

/// A collection split into partitions and bound to an [`ExecutionContext`].
///
/// Transformations consume the dataset and return a new one, like iterator
/// adapters. Clone a dataset to run several pipelines over the same data.
#[derive(Debug, Clone)]
pub struct Dataset<'ctx, T> {
    ctx: &'ctx ExecutionContext,
    partitions: Vec<Vec<T>>,
}

impl<'ctx, T: Send> Dataset<'ctx, T> {
    /// Number of partitions.
    pub const fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Total number of elements.
    pub fn count(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    /// Redistribute the elements over `n` partitions, keeping their order.
    pub fn repartition(self, n: usize) -> EngineResult<Self> {
        let ctx = self.ctx;
        let items = self.collect();
        ctx.parallelize(items, n)
    }

    /// Apply `f` to every element.
    pub fn map<U, F>(self, f: F) -> Dataset<'ctx, U>
    where
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        let Self { ctx, partitions } = self;
        let partitions = ctx.pool.install(|| {
            partitions
                .into_par_iter()
                .map(|part| part.into_iter().map(&f).collect::<Vec<U>>())
                .collect::<Vec<_>>()
        });
        Dataset { ctx, partitions }
    }

    /// Apply `f` to every element and flatten the results.
    pub fn flat_map<U, I, F>(self, f: F) -> Dataset<'ctx, U>
    where
        U: Send,
        I: IntoIterator<Item = U>,
        F: Fn(T) -> I + Sync + Send,
    {
        let Self { ctx, partitions } = self;
        let partitions = ctx.pool.install(|| {
            partitions
                .into_par_iter()
                .map(|part| part.into_iter().flat_map(&f).collect::<Vec<U>>())
                .collect::<Vec<_>>()
        });
        Dataset { ctx, partitions }
    }

    /// Keep only the elements for which `predicate` returns `true`.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Sync + Send,
    {
        let Self { ctx, partitions } = self;
        let partitions = ctx.pool.install(|| {
            partitions
                .into_par_iter()
                .map(|part| {
                    part.into_iter()
                        .filter(|item| predicate(item))
                        .collect::<Vec<T>>()
                })
                .collect::<Vec<_>>()
        });
        Self { ctx, partitions }
    }

    /// Add up every element.
    pub fn sum<S>(self) -> S
    where
        S: Send + Sum<T> + Sum<S>,
    {
        let Self { ctx, partitions } = self;
        ctx.pool
            .install(|| partitions.into_par_iter().flatten().sum())
    }

    /// Sort all elements with `compare`, keeping the partition count.
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Sync + Send,
    {
        let n = self.num_partitions();
        let Self { ctx, partitions } = self;
        let sorted = ctx.pool.install(|| {
            let mut all: Vec<T> = partitions.into_iter().flatten().collect();
            all.par_sort_by(compare);
            all
        });
        Self {
            ctx,
            partitions: chunk(sorted, n),
        }
    }

    /// The first `n` elements in partition order.
    pub fn take(self, n: usize) -> Vec<T> {
        self.partitions.into_iter().flatten().take(n).collect()
    }

    /// All elements in partition order.
    pub fn collect(self) -> Vec<T> {
        self.partitions.into_iter().flatten().collect()
    }
}

impl<'ctx, K, V> Dataset<'ctx, (K, V)>
where
    K: Hash + Eq + Send,
    V: Send,
{
    /// Merge the values of each key with `f`, producing `num_partitions` partitions.
    ///
    /// Each input partition is combined locally and split into hash buckets;
    /// bucket `i` of every input partition is then merged into output
    /// partition `i`. Every key ends up in exactly one output partition.
    pub fn reduce_by_key<F>(self, f: F, num_partitions: usize) -> EngineResult<Self>
    where
        F: Fn(V, V) -> V + Sync + Send,
    {
        if num_partitions == 0 {
            return Err(EngineError::ZeroPartitions);
        }
        let Self { ctx, partitions } = self;
        let partitions = ctx.pool.install(|| {
            let shuffled: Vec<Vec<HashMap<K, V>>> = partitions
                .into_par_iter()
                .map(|part| {
                    let mut buckets: Vec<HashMap<K, V>> =
                        (0..num_partitions).map(|_| HashMap::new()).collect();
                    for (key, value) in part {
                        let bucket = bucket_of(&key, num_partitions);
                        combine(&mut buckets[bucket], key, value, &f);
                    }
                    buckets
                })
                .collect();

            let mut per_bucket: Vec<Vec<HashMap<K, V>>> = (0..num_partitions)
                .map(|_| Vec::with_capacity(shuffled.len()))
                .collect();
            for buckets in shuffled {
                for (i, bucket) in buckets.into_iter().enumerate() {
                    per_bucket[i].push(bucket);
                }
            }

            per_bucket
                .into_par_iter()
                .map(|maps| {
                    let mut merged = HashMap::new();
                    for (key, value) in maps.into_iter().flatten() {
                        combine(&mut merged, key, value, &f);
                    }
                    merged.into_iter().collect::<Vec<(K, V)>>()
                })
                .collect::<Vec<_>>()
        });
        Ok(Self { ctx, partitions })
    }

    /// Collect the pairs into a map.
    pub fn collect_map(self) -> HashMap<K, V> {
        self.partitions.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ExecutionContext {
        ExecutionContext::new(Master::Local(2)).unwrap()
    }

    #[test]
    fn parses_master_addresses() {
        assert_eq!("local".parse::<Master>().unwrap(), Master::Local(1));
        assert_eq!("local[4]".parse::<Master>().unwrap(), Master::Local(4));
        assert_eq!("local[*]".parse::<Master>().unwrap(), Master::LocalAll);
        assert_eq!(Master::Local(3).to_string(), "local[3]");
    }

    #[test]
    fn rejects_unknown_masters() {
        for bad in ["spark://host:7077", "local[0]", "local[x]", "local[", ""] {
            assert!(
                matches!(bad.parse::<Master>(), Err(EngineError::InvalidMaster(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn context_uses_requested_workers() {
        let ctx = ExecutionContext::new(Master::Local(3)).unwrap();
        assert_eq!(ctx.workers(), 3);
        assert_eq!(ctx.master(), Master::Local(3));
        ctx.stop();
    }

    #[test]
    fn split_keeps_order_and_balances() {
        let parts = split_into((0..7).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(parts, vec![vec![0, 1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn split_pads_with_empty_partitions() {
        let parts = split_into(vec![1], 3).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.concat(), vec![1]);
    }

    #[test]
    fn zero_partitions_is_an_error() {
        let ctx = ctx();
        assert!(matches!(
            ctx.parallelize(vec![1], 0),
            Err(EngineError::ZeroPartitions)
        ));
    }

    #[test]
    fn map_filter_sum() {
        let ctx = ctx();
        let total: u64 = ctx
            .parallelize((1..=10u64).collect(), 4)
            .unwrap()
            .map(|x| x * 2)
            .filter(|x| x % 4 == 0)
            .sum();
        assert_eq!(total, 4 + 8 + 12 + 16 + 20);
    }

    #[test]
    fn flat_map_preserves_order() {
        let ctx = ctx();
        let lines = vec!["a b".to_string(), "c".to_string()];
        let words = ctx
            .parallelize(lines, 2)
            .unwrap()
            .flat_map(|l| l.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect();
        assert_eq!(words, ["a", "b", "c"]);
    }

    #[test]
    fn reduce_by_key_merges_across_partitions() {
        let ctx = ctx();
        let pairs = vec![("a", 1), ("b", 1), ("a", 1), ("c", 5), ("a", 1)];
        for n in 1..=4 {
            let reduced = ctx
                .parallelize(pairs.clone(), 3)
                .unwrap()
                .reduce_by_key(|x, y| x + y, n)
                .unwrap();
            assert_eq!(reduced.num_partitions(), n);
            let map = reduced.collect_map();
            assert_eq!(map.len(), 3);
            assert_eq!(map["a"], 3);
            assert_eq!(map["b"], 1);
            assert_eq!(map["c"], 5);
        }
    }

    #[test]
    fn sort_then_take() {
        let ctx = ctx();
        let top = ctx
            .parallelize(vec![3, 9, 1, 7, 5], 2)
            .unwrap()
            .sort_by(|a, b| b.cmp(a))
            .take(3);
        assert_eq!(top, vec![9, 7, 5]);
    }

    #[test]
    fn repartition_keeps_elements() {
        let ctx = ctx();
        let ds = ctx.parallelize((0..10).collect(), 2).unwrap();
        let ds = ds.repartition(5).unwrap();
        assert_eq!(ds.num_partitions(), 5);
        assert_eq!(ds.count(), 10);
        assert_eq!(ds.collect(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn text_file_reads_lines() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, "one two\nthree\n").unwrap();

        let ctx = ctx();
        let ds = ctx.text_file(&path, 4, None).unwrap();
        assert_eq!(ds.count(), 2);
        assert_eq!(ds.num_partitions(), 4);
    }

    #[test]
    fn text_file_replaces_invalid_utf8() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, b"\xff\xfe abc\nde\xc3 f\n").unwrap();

        let ctx = ctx();
        let ds = ctx.text_file(&path, 3, None).unwrap();
        assert_eq!(ds.num_partitions(), 3);
        let lines = ds.collect();
        assert_eq!(lines, vec!["\u{fffd}\u{fffd} abc".to_string(), "de\u{fffd} f".to_string()]);
    }

    #[test]
    fn text_file_rejects_zero_partitions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, "one\n").unwrap();

        let ctx = ctx();
        let err = ctx.text_file(&path, 0, None).unwrap_err();
        assert!(matches!(err, EngineError::ZeroPartitions));
    }

    #[test]
    fn text_file_enforces_size_limit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, "0123456789").unwrap();

        let ctx = ctx();
        let err = ctx.text_file(&path, 1, Some(5)).unwrap_err();
        assert!(matches!(err, EngineError::TooLarge { size: 10, limit: 5, .. }));
    }

    #[test]
    fn text_file_missing_is_read_error() {
        let ctx = ctx();
        let err = ctx
            .text_file(Utf8Path::new("/nonexistent/input.txt"), 1, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::Read { .. }));
    }
}
