use std::{
    collections::{hash_map::Entry, HashMap},
    ops::Index,
};

use nalgebra::Vector3;
use plantmesh_common::Float;

use crate::{PropertyArray, PropertyError, PropertyKey, PropertyKind};

/// A mapping from property names to per-triangle value arrays.
///
/// # Invariants
///
/// * the array under [PropertyKey::Normal], if any, holds [Vector](PropertyArray::Vector) values
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable<Real: Float> {
    arrays: HashMap<PropertyKey, PropertyArray<Real>>,
}

static_assertions::assert_impl_all!(PropertyTable<f32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PropertyTable<f64>: Send, Sync, Clone);

impl<Real: Float> Default for PropertyTable<Real> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Real: Float> PropertyTable<Real> {
    pub fn new() -> Self {
        Self {
            arrays: HashMap::new(),
        }
    }

    /// The number of properties in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &PropertyKey) -> bool {
        self.arrays.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyArray<Real>> {
        self.arrays.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.arrays.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &PropertyArray<Real>)> {
        self.arrays.iter()
    }

    /// The set of keys in the table, sorted.
    pub fn schema(&self) -> Vec<PropertyKey> {
        let mut keys: Vec<_> = self.arrays.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// The normal of each triangle, if normals have been materialized.
    pub fn normals(&self) -> Option<&[Vector3<Real>]> {
        self.arrays
            .get(&PropertyKey::Normal)
            .and_then(PropertyArray::as_vectors)
    }

    /// Get the normal array, creating it with room for `capacity` normals if it doesn't exist.
    ///
    /// # Panics
    ///
    /// * if the normal property holds anything but vectors, which [append](Self::append) and
    ///   [merge](Self::merge) never allow
    pub fn normals_mut(&mut self, capacity: usize) -> &mut Vec<Vector3<Real>> {
        let array = self
            .arrays
            .entry(PropertyKey::Normal)
            .or_insert_with(|| PropertyArray::Vector(Vec::with_capacity(capacity)));
        match array {
            PropertyArray::Vector(normals) => normals,
            // every way into the table checks this
            _ => unreachable!("normal property holds non-vector values"),
        }
    }

    /// Ensure that `other` tracks exactly the same properties as `self`.
    ///
    /// # Errors
    ///
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if the key sets differ.
    pub fn check_schema(&self, other: &Self) -> Result<(), PropertyError> {
        let mut missing: Vec<_> = self
            .arrays
            .keys()
            .filter(|k| !other.arrays.contains_key(k))
            .cloned()
            .collect();
        let mut unexpected: Vec<_> = other
            .arrays
            .keys()
            .filter(|k| !self.arrays.contains_key(k))
            .cloned()
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        missing.sort();
        unexpected.sort();
        Err(PropertyError::SchemaMismatch {
            missing,
            unexpected,
        })
    }

    /// Ensure that `array` could be appended under `key`, leaving the property with exactly
    /// `triangles` values.
    ///
    /// # Errors
    ///
    /// * [`KindMismatch`](PropertyError::KindMismatch) if `key` already holds a different kind of
    ///   value, or if `key` is [Normal](PropertyKey::Normal) and `array` doesn't hold vectors.
    /// * [`Length`](PropertyError::Length) if the property would hold some other number of values.
    pub fn check_append(
        &self,
        key: &PropertyKey,
        array: &PropertyArray<Real>,
        triangles: usize,
    ) -> Result<(), PropertyError> {
        let expected_kind = match self.arrays.get(key) {
            Some(existing) => Some(existing.kind()),
            None if key.is_normal() => Some(PropertyKind::Vector),
            None => None,
        };
        if let Some(expected) = expected_kind.filter(|&k| k != array.kind()) {
            return Err(PropertyError::KindMismatch {
                key: key.clone(),
                expected,
                found: array.kind(),
            });
        }
        let found = self.arrays.get(key).map_or(0, PropertyArray::len) + array.len();
        if found != triangles {
            return Err(PropertyError::Length {
                key: key.clone(),
                expected: triangles,
                found,
            });
        }
        Ok(())
    }

    /// Append `array` to the property under `key`, inserting it if the key is absent.
    ///
    /// See [check_append](Self::check_append) for errors; nothing is changed on error.
    pub fn append(
        &mut self,
        key: PropertyKey,
        array: PropertyArray<Real>,
        triangles: usize,
    ) -> Result<(), PropertyError> {
        self.check_append(&key, &array, triangles)?;
        match self.arrays.entry(key) {
            Entry::Occupied(mut entry) => {
                entry
                    .get_mut()
                    .append(array)
                    .map_err(|rejected| PropertyError::KindMismatch {
                        key: entry.key().clone(),
                        expected: entry.get().kind(),
                        found: rejected.kind(),
                    })
            }
            Entry::Vacant(entry) => {
                entry.insert(array);
                Ok(())
            }
        }
    }

    /// Append every array of `other` onto the matching array of `self`.
    ///
    /// Both tables must have the same schema, and each shared key must hold the same kind of value
    /// in both. Everything is checked before any array is touched, so `self` is unchanged on
    /// error.
    ///
    /// # Errors
    ///
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if the key sets differ.
    /// * [`KindMismatch`](PropertyError::KindMismatch) if a key holds different kinds of value.
    pub fn merge(&mut self, other: &Self) -> Result<(), PropertyError> {
        self.check_schema(other)?;
        let mut pairs = Vec::with_capacity(self.arrays.len());
        for (key, ours) in self.arrays.iter_mut() {
            let theirs = &other.arrays[key];
            if ours.kind() != theirs.kind() {
                return Err(PropertyError::KindMismatch {
                    key: key.clone(),
                    expected: ours.kind(),
                    found: theirs.kind(),
                });
            }
            pairs.push((key, ours, theirs));
        }
        for (key, ours, theirs) in pairs {
            ours.extend_from(theirs)
                .map_err(|found| PropertyError::KindMismatch {
                    key: key.clone(),
                    expected: ours.kind(),
                    found,
                })?;
        }
        Ok(())
    }

    /// As [merge](Self::merge), moving the arrays of `other` rather than copying them.
    ///
    /// # Errors
    ///
    /// * as [merge](Self::merge); `other` is returned alongside the error, unchanged.
    pub fn merge_owned(&mut self, mut other: Self) -> Result<(), (PropertyError, Self)> {
        if let Err(e) = self.check_schema(&other) {
            return Err((e, other));
        }
        for (key, ours) in self.arrays.iter() {
            let found = other.arrays[key].kind();
            if ours.kind() != found {
                let e = PropertyError::KindMismatch {
                    key: key.clone(),
                    expected: ours.kind(),
                    found,
                };
                return Err((e, other));
            }
        }
        for (key, ours) in self.arrays.iter_mut() {
            if let Some(theirs) = other.arrays.remove(key) {
                let res = ours.append(theirs);
                debug_assert!(res.is_ok(), "kind of `{key}` changed after it was checked");
            }
        }
        Ok(())
    }
}

impl<Real: Float> Index<&PropertyKey> for PropertyTable<Real> {
    type Output = PropertyArray<Real>;

    /// # Panics
    ///
    /// * if `key` isn't in the table
    #[inline]
    fn index(&self, key: &PropertyKey) -> &Self::Output {
        &self.arrays[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn table(entries: Vec<(&str, PropertyArray<f64>)>) -> PropertyTable<f64> {
        let triangles = entries.first().map_or(0, |(_, a)| a.len());
        let mut table = PropertyTable::new();
        for (key, array) in entries {
            table.append(key.into(), array, triangles).unwrap();
        }
        table
    }

    #[test]
    fn merging_empty_tables_is_a_no_op() {
        let mut a = PropertyTable::<f64>::new();
        a.merge(&PropertyTable::new()).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn merge_appends_every_array_in_order() {
        let mut a = table(vec![
            ("normal", vec![vector![0.0, 0.0, 1.0]].into()),
            ("absorbed_light", vec![1.0_f64].into()),
        ]);
        let b = table(vec![
            (
                "normal",
                vec![vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]].into(),
            ),
            ("absorbed_light", vec![2.0_f64, 3.0].into()),
        ]);
        a.merge(&b).unwrap();
        assert_eq!(
            a.normals().unwrap(),
            &[
                vector![0.0, 0.0, 1.0],
                vector![1.0, 0.0, 0.0],
                vector![0.0, 1.0, 0.0]
            ]
        );
        assert_eq!(
            a[&PropertyKey::from("absorbed_light")].as_scalars().unwrap(),
            &[1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn schema_mismatch_leaves_receiver_untouched() {
        let mut a = table(vec![("normal", vec![vector![0.0, 0.0, 1.0]].into())]);
        let before = a.clone();
        let b = table(vec![
            ("normal", vec![vector![0.0, 0.0, 1.0]].into()),
            ("color", vec![3u32].into()),
        ]);
        let err = a.merge(&b).unwrap_err();
        assert_eq!(
            err,
            PropertyError::SchemaMismatch {
                missing: vec![],
                unexpected: vec![PropertyKey::from("color")],
            }
        );
        assert_eq!(a, before);
    }

    #[test]
    fn kind_mismatch_leaves_receiver_untouched() {
        let mut a = table(vec![
            ("normal", vec![vector![0.0, 0.0, 1.0]].into()),
            ("tag", vec![1u32].into()),
        ]);
        let before = a.clone();
        let b = table(vec![
            ("normal", vec![vector![0.0, 0.0, 1.0]].into()),
            ("tag", vec![true].into()),
        ]);
        assert!(matches!(
            a.merge(&b),
            Err(PropertyError::KindMismatch {
                expected: PropertyKind::Index,
                found: PropertyKind::Flag,
                ..
            })
        ));
        assert_eq!(a, before);
    }

    #[test]
    fn append_checks_resulting_length() {
        let mut a = PropertyTable::<f32>::new();
        let err = a
            .append("light".into(), vec![1.0_f32, 2.0].into(), 3)
            .unwrap_err();
        assert_eq!(
            err,
            PropertyError::Length {
                key: "light".into(),
                expected: 3,
                found: 2
            }
        );
        assert!(!a.contains(&"light".into()));
        a.append("light".into(), vec![1.0_f32, 2.0].into(), 2).unwrap();
        a.append("light".into(), vec![3.0_f32].into(), 3).unwrap();
        assert_eq!(a[&PropertyKey::from("light")].len(), 3);
    }

    #[test]
    fn normal_key_only_holds_vectors() {
        let mut a = PropertyTable::<f64>::new();
        let err = a
            .append(PropertyKey::Normal, vec![1.0_f64].into(), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            PropertyError::KindMismatch {
                expected: PropertyKind::Vector,
                found: PropertyKind::Scalar,
                ..
            }
        ));
        assert!(a.normals().is_none());
    }

    #[test]
    fn normals_mut_creates_empty_array() {
        let mut a = PropertyTable::<f32>::new();
        assert!(a.normals_mut(8).is_empty());
        assert_eq!(a.schema(), vec![PropertyKey::Normal]);
        assert_eq!(a.normals(), Some(&[][..]));
    }

    #[test]
    fn owned_merge_moves_arrays() {
        let mut a = table(vec![("light", vec![1.0_f64].into())]);
        let b = table(vec![("light", vec![2.0_f64].into())]);
        a.merge_owned(b).unwrap();
        assert_eq!(
            a[&PropertyKey::from("light")].as_scalars().unwrap(),
            &[1.0, 2.0]
        );
    }

    #[test]
    fn owned_merge_appends_every_kind() {
        let mut a = table(vec![
            ("light", vec![1.0_f64].into()),
            ("tilt", vec![vector![1.0_f64, 0.0, 0.0]].into()),
            ("tint", vec![nalgebra::point![1.0_f64, 0.0, 0.0, 1.0]].into()),
            ("organ", vec![3u32].into()),
            ("lit", vec![true].into()),
        ]);
        let b = a.clone();
        a.merge_owned(b).unwrap();
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|(_, array)| array.len() == 2));
        assert_eq!(a[&PropertyKey::from("organ")].as_indices().unwrap(), &[3, 3]);
        assert_eq!(a[&PropertyKey::from("lit")].as_flags().unwrap(), &[true, true]);
    }

    #[test]
    fn owned_merge_hands_back_rejected_table() {
        let mut a = table(vec![("light", vec![1.0_f64].into())]);
        let before = a.clone();
        let b = table(vec![("light", vec![7u32].into())]);
        let (err, back) = a.merge_owned(b.clone()).unwrap_err();
        assert!(matches!(err, PropertyError::KindMismatch { .. }));
        assert_eq!(back, b);
        assert_eq!(a, before);
    }
}
