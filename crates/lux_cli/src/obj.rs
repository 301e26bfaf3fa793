//! OBJ mesh loading into raw triangles.

use anyhow::{bail, Context, Result};
use lux_math::Vec3;
use std::path::Path;

/// Load every model of an OBJ file as a triangle soup.
///
/// Polygons are triangulated on load.
pub fn load_obj_triangles(path: &Path) -> Result<Vec<[Vec3; 3]>> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("failed to load OBJ {}", path.display()))?;

    if models.is_empty() {
        bail!("No models found in OBJ file {}", path.display());
    }

    let mut triangles = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let vertex = |index: u32| -> Result<Vec3> {
            let start = index as usize * 3;
            mesh.positions
                .get(start..start + 3)
                .map(Vec3::from_slice)
                .with_context(|| format!("vertex index {} out of range in {}", index, model.name))
        };

        for face in mesh.indices.chunks_exact(3) {
            triangles.push([vertex(face[0])?, vertex(face[1])?, vertex(face[2])?]);
        }
    }

    log::info!(
        "Loaded {} triangles from {} model(s) in {}",
        triangles.len(),
        models.len(),
        path.display()
    );

    Ok(triangles)
}
