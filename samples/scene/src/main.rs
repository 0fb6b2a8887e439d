mod cli;

use clap::Parser;
use cli::{Cli, FloatWidth};
use nalgebra::Vector3;
use plantmesh::{
    primitive::{Ellipse, Primitive, SolidFrustum},
    Error, Float, Mesh, PropertyValue,
};

/// Values of the `organ` property.
const INTERNODE: u32 = 0;
const LEAF: u32 = 1;

#[inline]
fn real<Real: Float>(x: f64) -> Real {
    nalgebra::convert(x)
}

/// A copy of `mesh` moved by `offset`.
fn translated<Real: Float>(mesh: &Mesh<Real>, offset: Vector3<Real>) -> Result<Mesh<Real>, Error> {
    Mesh::from_vertices(mesh.vertices().iter().map(|p| p + offset).collect())
}

/// Tag every triangle of `mesh` as belonging to `organ`, with no light absorbed yet.
fn tag<Real: Float>(mut mesh: Mesh<Real>, organ: u32) -> Result<Mesh<Real>, Error> {
    mesh.add_property("organ", PropertyValue::Index(organ), None)?;
    mesh.add_property("absorbed_light", Real::ZERO, None)?;
    Ok(mesh)
}

/// Stack internodes along +x, each topped by a leaf, and merge the lot.
#[tracing::instrument(skip(cli), fields(internodes = cli.internodes))]
fn build<Real: Float>(cli: &Cli) -> Result<Mesh<Real>, Error> {
    let internode_length = real::<Real>(cli.internode_length);
    let ratio = real::<Real>(cli.ratio);
    let leaf = Ellipse::new(real(cli.leaf[0]), real(cli.leaf[1]))
        .with_triangles(cli.leaf_triangles)
        .mesh()?;

    let mut diameter = real::<Real>(cli.diameter);
    let mut organs = Vec::with_capacity(2 * cli.internodes);
    for k in 0..cli.internodes {
        let x = internode_length * Real::from_count(k);
        let internode = SolidFrustum::new(internode_length, diameter, diameter, ratio)
            .with_triangles(cli.internode_triangles)
            .mesh()?;
        let internode = tag(translated(&internode, Vector3::x() * x)?, INTERNODE)?;
        tracing::debug!(internode = k, area = %internode.area(), "built internode");
        organs.push(internode);

        diameter *= ratio;
        let offset = Vector3::new(x + internode_length, diameter * Real::HALF, Real::ZERO);
        organs.push(tag(translated(&leaf, offset)?, LEAF)?);
    }
    if organs.is_empty() {
        return Ok(Mesh::new());
    }
    Mesh::merge(&organs)
}

fn report<Real: Float>(plant: &Mesh<Real>) {
    let leaves = plant
        .property("organ")
        .and_then(|p| p.as_indices())
        .map_or(0, |organs| organs.iter().filter(|&&o| o == LEAF).count());
    tracing::info!(
        precision = ?plant.precision(),
        nvertices = plant.nvertices(),
        ntriangles = plant.ntriangles(),
        nnormals = plant.normals().len(),
        leaves,
        area = %plant.area(),
        "built plant"
    );
    if let Some(bounds) = plant.bounds() {
        tracing::info!(mins = %bounds.mins, maxs = %bounds.maxs, "plant bounds");
    }
}

pub fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli);
    match cli.float {
        FloatWidth::F32 => report(&build::<f32>(&cli)?),
        FloatWidth::F64 => report(&build::<f64>(&cli)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plant_is_consistent() {
        let cli = Cli::try_parse_from(["scene"]).unwrap();
        let plant = build::<f64>(&cli).unwrap();
        assert_eq!(plant.ntriangles(), 4 * (40 + 20));
        assert_eq!(plant.normals().len(), plant.ntriangles());
        assert_eq!(plant.property("organ").unwrap().len(), plant.ntriangles());
        assert_eq!(plant.property("absorbed_light").unwrap().len(), plant.ntriangles());
    }

    #[test]
    fn no_internodes_no_plant() {
        let cli = Cli::try_parse_from(["scene", "--internodes", "0"]).unwrap();
        assert!(build::<f32>(&cli).unwrap().is_empty());
    }
}
