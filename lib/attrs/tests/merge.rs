use plantmesh_attrs::{PropertyArray, PropertyError, PropertyKey, PropertyTable};
use quickcheck_macros::quickcheck;

fn table(light: Vec<f64>, tags: Vec<u32>) -> PropertyTable<f64> {
    let mut table = PropertyTable::new();
    let n = light.len();
    table.append("light".into(), light.into(), n).unwrap();
    table.append("tag".into(), tags.into(), n).unwrap();
    table
}

/// Merging appends every column in order, whatever the lengths involved.
#[quickcheck]
fn merge_concatenates(a: Vec<(f64, u32)>, b: Vec<(f64, u32)>) -> bool {
    let split = |v: &[(f64, u32)]| -> (Vec<f64>, Vec<u32>) { v.iter().copied().unzip() };
    let ((al, at), (bl, bt)) = (split(&a), split(&b));
    let mut merged = table(al.clone(), at.clone());
    merged.merge(&table(bl.clone(), bt.clone())).unwrap();

    let light = merged[&PropertyKey::from("light")].as_scalars().unwrap();
    let tags = merged[&PropertyKey::from("tag")].as_indices().unwrap();
    let same = |x: &[f64], y: &[f64]| x.iter().zip(y).all(|(p, q)| p.to_bits() == q.to_bits());
    light.len() == a.len() + b.len()
        && same(&light[..a.len()], &al)
        && same(&light[a.len()..], &bl)
        && tags[..a.len()] == at[..]
        && tags[a.len()..] == bt[..]
}

#[test]
fn missing_columns_are_reported_sorted() {
    let mut a = table(vec![1.0], vec![1]);
    a.append("zeta".into(), vec![true].into(), 1).unwrap();
    let mut b = PropertyTable::new();
    b.append("light".into(), PropertyArray::Scalar(vec![2.0]), 1)
        .unwrap();
    assert_eq!(
        a.merge(&b),
        Err(PropertyError::SchemaMismatch {
            missing: vec!["tag".into(), "zeta".into()],
            unexpected: vec![],
        })
    );
}
