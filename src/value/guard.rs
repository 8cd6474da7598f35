//! Mutable access to container slots and payloads.
//!
//! None of these guards keeps a container lock while it is alive. Each one works on a
//! snapshot taken under a short lock and writes it back under another short lock when it
//! is dropped, so the same container can be read or mutated through any handle in the
//! meantime.

use std::{
    collections::BTreeMap,
    fmt, mem,
    ops::{Deref, DerefMut},
};

use faststr::FastStr;
use parking_lot::RwLock;

use super::handle::Json;

enum Slot<'a> {
    Element(&'a RwLock<Vec<Json>>, usize),
    Member(&'a RwLock<BTreeMap<FastStr, Json>>, FastStr),
}

/// A mutable reference to one slot of an array or object, returned by [`Json::at_mut`] and
/// [`Json::get_or_insert`].
///
/// The guard derefs to the stored child. Mutating that child (`push`, `insert`, ..) goes
/// straight to the shared node. Assigning through the guard rebinds the slot when the guard
/// is dropped, and every alias of the container observes the new child.
///
/// An element slot whose index no longer exists at drop time is left alone.
pub struct JsonMut<'a> {
    slot: Slot<'a>,
    origin: Json,
    value: Json,
}

impl<'a> JsonMut<'a> {
    pub(crate) fn element(items: &'a RwLock<Vec<Json>>, index: usize, value: Json) -> Self {
        Self {
            slot: Slot::Element(items, index),
            origin: value.clone(),
            value,
        }
    }

    pub(crate) fn member(
        members: &'a RwLock<BTreeMap<FastStr, Json>>,
        key: FastStr,
        value: Json,
    ) -> Self {
        Self {
            slot: Slot::Member(members, key),
            origin: value.clone(),
            value,
        }
    }
}

impl Deref for JsonMut<'_> {
    type Target = Json;

    #[inline]
    fn deref(&self) -> &Json {
        &self.value
    }
}

impl DerefMut for JsonMut<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Json {
        &mut self.value
    }
}

impl Drop for JsonMut<'_> {
    fn drop(&mut self) {
        if self.value.ptr_eq(&self.origin) {
            return;
        }
        let value = mem::replace(&mut self.value, Json::null());
        match &self.slot {
            Slot::Element(items, index) => {
                let mut items = items.write();
                let len = items.len();
                match items.get_mut(*index) {
                    Some(item) => *item = value,
                    None => tracing::debug!(index, len, "array slot vanished before write-back"),
                }
            }
            Slot::Member(members, key) => {
                members.write().insert(key.clone(), value);
            }
        }
    }
}

impl fmt::Debug for JsonMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

/// A mutable snapshot of a view's backing collection, returned by
/// [`Array::data_mut`](crate::Array::data_mut) and [`Object::data_mut`](crate::Object::data_mut).
///
/// The snapshot replaces the collection when the guard is dropped. Changes made to the same
/// container through other handles while the guard is alive are overwritten.
pub struct DataMut<'a, T: Default> {
    lock: &'a RwLock<T>,
    data: T,
}

impl<'a, T: Default + Clone> DataMut<'a, T> {
    pub(crate) fn new(lock: &'a RwLock<T>) -> Self {
        let data = lock.read_recursive().clone();
        Self { lock, data }
    }
}

impl<T: Default> Deref for DataMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T: Default> DerefMut for DataMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T: Default> Drop for DataMut<'_, T> {
    fn drop(&mut self) {
        let data = mem::take(&mut self.data);
        *self.lock.write() = data;
    }
}

impl<T: Default + fmt::Debug> fmt::Debug for DataMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}

#[cfg(test)]
mod test {
    use std::{sync::mpsc, thread, time::Duration};

    use faststr::FastStr;

    use crate::{array, object, Json};

    #[test]
    fn test_chained_slot_access_does_not_block() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let arr = Json::from(array![[]]);
            arr.at_mut(0).push(arr.len() as i32);

            let obj = Json::from(object! {"name": "x", "list": []});
            obj.get_or_insert("list").push(obj.get("name"));
            assert!(obj.get_or_insert("fresh").is_null());
            assert!(obj.contains_key("fresh"));

            let _ = tx.send((arr, obj));
        });

        let (arr, obj) = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("chained slot access blocked");
        assert_eq!(arr.at(0).at(0), 1);
        assert_eq!(obj.get("list").at(0), "x");
    }

    #[test]
    fn test_chained_data_access_does_not_block() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let arr = array![1, 2];
            arr.data_mut().push(Json::from(arr.len() as i32));

            let obj = object! {"a": 1};
            obj.data_mut()
                .insert(FastStr::new("n"), Json::from(obj.len() as i32));

            let _ = tx.send((arr, obj));
        });

        let (arr, obj) = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("chained data access blocked");
        assert_eq!(arr, [1, 2, 2]);
        assert_eq!(obj.get("n"), 1);
    }

    #[test]
    fn test_guard_alive_while_container_is_used() {
        let arr = Json::from(array![[1], 2]);
        let alias = arr.clone();
        let mut slot = arr.at_mut(1);
        alias.push(3);
        assert_eq!(alias.len(), 3);
        *slot = Json::from("two");
        drop(slot);
        assert_eq!(alias.at(1), "two");
        assert_eq!(alias.at(2), 3);
    }

    #[test]
    fn test_unassigned_slot_keeps_concurrent_rebind() {
        let obj = Json::from(object! {"k": 1});
        let slot = obj.get_or_insert("k");
        obj.insert("k", 2);
        drop(slot);
        assert_eq!(obj.get("k"), 2);
    }

    #[test]
    fn test_vanished_element_is_skipped() {
        let arr = Json::from(array![1]);
        let mut slot = arr.at_mut(0);
        arr.pop();
        *slot = Json::from(9);
        drop(slot);
        assert!(arr.is_empty());
    }
}
