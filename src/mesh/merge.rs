use std::collections::HashMap;

use plantmesh_attrs::{PropertyArray, PropertyData, PropertyError, PropertyKey};
use plantmesh_common::Float;

use super::Mesh;
use crate::Error;

impl<Real: Float> Mesh<Real> {
    /// Concatenate `meshes` into a new mesh, in order.
    ///
    /// The first mesh is copied as-is; every other mesh must track exactly the same properties,
    /// which are appended onto the result along with its vertices.
    ///
    /// # Errors
    ///
    /// * [`EmptyInput`](Error::EmptyInput) if there are no meshes.
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if two meshes track different sets of
    ///   properties. A mesh whose normals were never materialized differs from one whose were.
    /// * [`KindMismatch`](PropertyError::KindMismatch) if a property holds different kinds of value
    ///   in two meshes.
    pub fn merge<'m>(meshes: impl IntoIterator<Item = &'m Self>) -> Result<Self, Error>
    where
        Real: 'm,
    {
        let mut meshes = meshes.into_iter();
        let mut res = meshes.next().ok_or(Error::EmptyInput)?.clone();
        for mesh in meshes {
            res.merge_from(mesh)?;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            ntriangles = res.ntriangles(),
            nproperties = res.properties.len(),
            "merged meshes"
        );
        Ok(res)
    }

    /// Append a copy of `other`, including all of its properties, onto `self`.
    ///
    /// See [merge](Self::merge) for errors; `self` is unchanged on error.
    pub fn merge_from(&mut self, other: &Self) -> Result<(), Error> {
        if let Err(e) = self.properties.merge(&other.properties) {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, "rejected mesh merge");
            return Err(e.into());
        }
        self.vertices.extend_from_slice(&other.vertices);
        Ok(())
    }

    /// As [merge_from](Self::merge_from), moving the data of `other` instead of copying it.
    ///
    /// # Errors
    ///
    /// * as [merge](Self::merge); `other` is handed back, unchanged, alongside the error.
    pub fn append(&mut self, other: Self) -> Result<(), (Error, Self)> {
        let Self {
            vertices,
            properties,
        } = other;
        match self.properties.merge_owned(properties) {
            Ok(()) => {
                self.vertices.extend(vertices);
                Ok(())
            }
            Err((e, properties)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "rejected mesh merge");
                Err((
                    e.into(),
                    Self {
                        vertices,
                        properties,
                    },
                ))
            }
        }
    }

    /// Add or extend a per-triangle property.
    ///
    /// A single [value](PropertyData::Broadcast) is repeated `triangles.unwrap_or(self.ntriangles())`
    /// times; an [array](PropertyData::Array) is used as-is. The values are appended to the
    /// property under `key`, which is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// * [`Reserved`](PropertyError::Reserved) if `key` is the normal property.
    /// * [`KindMismatch`](PropertyError::KindMismatch) if `key` already holds another kind of value.
    /// * [`Length`](PropertyError::Length) if the property wouldn't end up with exactly one value per
    ///   triangle.
    ///
    /// Nothing is changed on error.
    pub fn add_property(
        &mut self,
        key: impl Into<PropertyKey>,
        data: impl Into<PropertyData<Real>>,
        triangles: Option<usize>,
    ) -> Result<(), Error> {
        let key = key.into();
        if key.is_normal() {
            return Err(PropertyError::Reserved(key).into());
        }
        let ntriangles = self.ntriangles();
        let array = data.into().into_array(triangles.unwrap_or(ntriangles));
        self.properties.append(key, array, ntriangles)?;
        Ok(())
    }

    /// Append the triangles of `donor`, along with values for each of the properties `self`
    /// tracks.
    ///
    /// Normals are brought up to date on both meshes and the donor's normals are appended. Any
    /// other properties of `donor` are ignored: the caller supplies them in `properties`, either
    /// one value per donor triangle or a single value for all of them. If a key is supplied more
    /// than once, the last value wins.
    ///
    /// # Errors
    ///
    /// * [`Reserved`](PropertyError::Reserved) if the normal property is supplied.
    /// * [`SchemaMismatch`](PropertyError::SchemaMismatch) if a property `self` tracks isn't
    ///   supplied, or if a property `self` doesn't track is supplied while `self` has triangles.
    /// * [`Length`](PropertyError::Length) if a supplied array doesn't have one value per donor
    ///   triangle.
    /// * [`KindMismatch`](PropertyError::KindMismatch) if a supplied value is a different kind from
    ///   what `self` holds under that key.
    ///
    /// Everything is checked before `self` is changed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(donor = donor.ntriangles())))]
    pub fn add(
        &mut self,
        mut donor: Self,
        properties: impl IntoIterator<Item = (PropertyKey, PropertyData<Real>)>,
    ) -> Result<(), Error> {
        let added = donor.ntriangles();
        let total = self.ntriangles() + added;

        let mut supplied = HashMap::<PropertyKey, PropertyArray<Real>>::new();
        for (key, data) in properties {
            if key.is_normal() {
                return Err(PropertyError::Reserved(key).into());
            }
            supplied.insert(key, data.into_array(added));
        }
        self.check_supplied(&supplied)?;
        for (key, array) in supplied.iter() {
            if array.len() != added {
                return Err(PropertyError::Length {
                    key: key.clone(),
                    expected: added,
                    found: array.len(),
                }
                .into());
            }
            self.properties.check_append(key, array, total)?;
        }

        self.update_normals();
        donor.update_normals();
        self.vertices.append(&mut donor.vertices);
        let normals = self.properties.normals_mut(total);
        normals.extend_from_slice(donor.properties.normals().unwrap_or(&[]));

        for (key, array) in supplied {
            self.properties.append(key, array, total)?;
        }
        Ok(())
    }

    /// Ensure that `supplied` covers every non-normal property `self` tracks, and only those
    /// unless `self` is empty.
    fn check_supplied(
        &self,
        supplied: &HashMap<PropertyKey, PropertyArray<Real>>,
    ) -> Result<(), PropertyError> {
        let missing: Vec<_> = self
            .properties
            .schema()
            .into_iter()
            .filter(|k| !k.is_normal() && !supplied.contains_key(k))
            .collect();
        let mut unexpected: Vec<_> = if self.is_empty() {
            Vec::new()
        } else {
            supplied
                .keys()
                .filter(|k| !self.properties.contains(k))
                .cloned()
                .collect()
        };
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        unexpected.sort();
        Err(PropertyError::SchemaMismatch {
            missing,
            unexpected,
        })
    }
}
