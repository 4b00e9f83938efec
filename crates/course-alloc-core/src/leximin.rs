// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::distribution::Distribution;
use std::cmp::Ordering;

/// Compares two distributions in the leximin order, scanning keys from
/// the largest (worst) downwards and returning the verdict of the first
/// key at which the counts differ.
///
/// Convention: `Greater` means `a` is **worse** off — it has strictly
/// more entries at the worst differing key. This orientation lets
/// pruning code read naturally as "discard when the optimistic bound
/// compares `Greater` than the incumbent". Callers must preserve this
/// convention; inverting it silently turns the solver into a
/// pessimizer.
///
/// The comparison is a total order: antisymmetric, transitive, and
/// `leximin_cmp(a, b) == leximin_cmp(b, a).reverse()`.
pub fn leximin_cmp<K: Copy + Ord>(a: &Distribution<K>, b: &Distribution<K>) -> Ordering {
    let mut left = a.iter_rev().peekable();
    let mut right = b.iter_rev().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            // Only `a` still holds keys here, so at its largest
            // remaining key `b` counts zero.
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some((ka, ca)), Some((kb, cb))) => {
                match ka.cmp(&kb) {
                    // `a` has people at a worse key that `b` lacks.
                    Ordering::Greater => return Ordering::Greater,
                    Ordering::Less => return Ordering::Less,
                    Ordering::Equal => {
                        if ca != cb {
                            return ca.cmp(&cb);
                        }
                        left.next();
                        right.next();
                    }
                }
            }
        }
    }
}
