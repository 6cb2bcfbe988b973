//! Output sinks.
//!
//! A [`Sink`] accepts one element at a time and advances. The bulk methods
//! have element-wise defaults; buffer-backed sinks override them.

use crate::error::{Error, Result};
use std::fmt;
use std::io;

/// Destination for formatted elements.
pub trait Sink<T: Copy> {
    /// Accept one element.
    fn put(&mut self, item: T) -> Result<()>;

    /// Accept a run of elements in order.
    fn put_slice(&mut self, items: &[T]) -> Result<()> {
        for &item in items {
            self.put(item)?;
        }
        Ok(())
    }

    /// Accept `count` copies of `item`.
    fn put_repeated(&mut self, item: T, count: usize) -> Result<()> {
        for _ in 0..count {
            self.put(item)?;
        }
        Ok(())
    }
}

impl<T: Copy, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    fn put(&mut self, item: T) -> Result<()> {
        (**self).put(item)
    }

    fn put_slice(&mut self, items: &[T]) -> Result<()> {
        (**self).put_slice(items)
    }

    fn put_repeated(&mut self, item: T, count: usize) -> Result<()> {
        (**self).put_repeated(item, count)
    }
}

impl<T: Copy> Sink<T> for Vec<T> {
    fn put(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn put_slice(&mut self, items: &[T]) -> Result<()> {
        self.extend_from_slice(items);
        Ok(())
    }

    fn put_repeated(&mut self, item: T, count: usize) -> Result<()> {
        self.extend(std::iter::repeat_n(item, count));
        Ok(())
    }
}

impl Sink<char> for String {
    fn put(&mut self, item: char) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn put_slice(&mut self, items: &[char]) -> Result<()> {
        self.extend(items.iter());
        Ok(())
    }

    fn put_repeated(&mut self, item: char, count: usize) -> Result<()> {
        self.extend(std::iter::repeat_n(item, count));
        Ok(())
    }
}

/// Byte sink over an `io::Write`.
///
/// No buffering of its own; wrap the writer in `BufWriter` when it is slow.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

const FILL_CHUNK: usize = 64;

impl<W: io::Write> Sink<u8> for IoSink<W> {
    fn put(&mut self, item: u8) -> Result<()> {
        self.writer.write_all(&[item])?;
        Ok(())
    }

    fn put_slice(&mut self, items: &[u8]) -> Result<()> {
        self.writer.write_all(items)?;
        Ok(())
    }

    fn put_repeated(&mut self, item: u8, count: usize) -> Result<()> {
        let chunk = [item; FILL_CHUNK];
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.writer.write_all(&chunk[..n])?;
            remaining -= n;
        }
        Ok(())
    }
}

/// Code point sink over a `fmt::Write`, e.g. a `fmt::Formatter`.
#[derive(Debug)]
pub struct FmtSink<W: fmt::Write> {
    writer: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> Sink<char> for FmtSink<W> {
    fn put(&mut self, item: char) -> Result<()> {
        self.writer.write_char(item)?;
        Ok(())
    }
}

/// Sink into a caller-owned slice. Fails once the slice is full.
#[derive(Debug)]
pub struct SliceSink<'a, T> {
    buf: &'a mut [T],
    len: usize,
}

impl<'a, T: Copy> SliceSink<'a, T> {
    pub fn new(buf: &'a mut [T]) -> Self {
        Self { buf, len: 0 }
    }

    /// Elements written so far.
    #[must_use]
    pub fn written(&self) -> &[T] {
        &self.buf[..self.len]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn reserve(&mut self, n: usize) -> Result<&mut [T]> {
        let end = self
            .len
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(Error::SliceFull {
                capacity: self.buf.len(),
            })?;
        let start = self.len;
        self.len = end;
        Ok(&mut self.buf[start..end])
    }
}

impl<T: Copy> Sink<T> for SliceSink<'_, T> {
    fn put(&mut self, item: T) -> Result<()> {
        self.reserve(1)?[0] = item;
        Ok(())
    }

    fn put_slice(&mut self, items: &[T]) -> Result<()> {
        self.reserve(items.len())?.copy_from_slice(items);
        Ok(())
    }

    fn put_repeated(&mut self, item: T, count: usize) -> Result<()> {
        self.reserve(count)?.fill(item);
        Ok(())
    }
}

/// Sink that only counts what it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    count: usize,
}

impl Counter {
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<T: Copy> Sink<T> for Counter {
    fn put(&mut self, _item: T) -> Result<()> {
        self.count += 1;
        Ok(())
    }

    fn put_slice(&mut self, items: &[T]) -> Result<()> {
        self.count += items.len();
        Ok(())
    }

    fn put_repeated(&mut self, _item: T, count: usize) -> Result<()> {
        self.count += count;
        Ok(())
    }
}

/// Sink calling a closure per element. See [`from_fn`].
pub struct FnSink<F> {
    f: F,
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

/// Build a sink from a closure.
pub const fn from_fn<F>(f: F) -> FnSink<F> {
    FnSink { f }
}

impl<T: Copy, F> Sink<T> for FnSink<F>
where
    F: FnMut(T) -> Result<()>,
{
    fn put(&mut self, item: T) -> Result<()> {
        (self.f)(item)
    }
}
