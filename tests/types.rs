use plantmesh::{
    primitive::{Primitive, SolidFrustum},
    Mesh, Precision, PropertyTable,
};

/// Ensure that Meshes can compile with both supported float widths
#[test]
fn mesh_precision() {
    let _32 = Mesh::<f32>::new();
    let _64 = Mesh::<f64>::new();
    let _default: Mesh = Mesh::new();
    let _props = PropertyTable::<f32>::new();
    assert_eq!(_32.precision(), Precision::Single);
    assert_eq!(_64.precision(), Precision::Double);
    assert_eq!(_default.precision(), Precision::Double);
}

#[test]
fn primitive_precision() {
    let single = SolidFrustum::new(2.0_f32, 1.0, 1.0, 0.5).mesh().unwrap();
    assert_eq!(single.precision(), Precision::Single);
    let double = SolidFrustum::new(2.0_f64, 1.0, 1.0, 0.5).mesh().unwrap();
    assert_eq!(double.precision(), Precision::Double);
}
