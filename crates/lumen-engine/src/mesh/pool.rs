use slotmap::{SlotMap, new_key_type};

use super::{Mesh, MeshView};

new_key_type! {
    /// Small copyable token for a mesh stored in a [`MeshPool`].
    ///
    /// Internally a slot index plus a reuse tag: once the slot is released (or the
    /// pool cleared) the tag no longer matches and the reference resolves to
    /// [`MeshView::EMPTY`]. `MeshRef::default()` is a null reference.
    pub struct MeshRef;
}

/// Slot table of variable-size meshes referenced from fixed-size primitives.
///
/// Entries persist across frames until [`release`](Self::release) or
/// [`clear`](Self::clear), so static icons and cached path tessellations can be
/// stored once and redrawn every frame by reference.
#[derive(Debug, Default)]
pub struct MeshPool {
    meshes: SlotMap<MeshRef, Mesh>,
    vertex_count: usize,
    index_count: usize,
}

impl MeshPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { meshes: SlotMap::with_capacity_and_key(capacity), ..Self::default() }
    }

    /// Stores `mesh` and returns its reference.
    pub fn store(&mut self, mesh: Mesh) -> MeshRef {
        self.vertex_count += mesh.vertices.len();
        self.index_count += mesh.indices.len();
        self.meshes.insert(mesh)
    }

    /// Resolves `mesh_ref`, or [`MeshView::EMPTY`] if it is stale, null or foreign.
    #[inline]
    pub fn get_mesh(&self, mesh_ref: MeshRef) -> MeshView<'_> {
        self.meshes.get(mesh_ref).map_or(MeshView::EMPTY, Mesh::view)
    }

    #[inline]
    pub fn get(&self, mesh_ref: MeshRef) -> Option<&Mesh> {
        self.meshes.get(mesh_ref)
    }

    #[inline]
    pub fn contains(&self, mesh_ref: MeshRef) -> bool {
        self.meshes.contains_key(mesh_ref)
    }

    /// Frees the slot. Returns `false` if the reference was already stale.
    pub fn release(&mut self, mesh_ref: MeshRef) -> bool {
        match self.meshes.remove(mesh_ref) {
            Some(mesh) => {
                self.vertex_count -= mesh.vertices.len();
                self.index_count -= mesh.indices.len();
                true
            }
            None => false,
        }
    }

    /// Releases every mesh. Outstanding references all become stale.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.vertex_count = 0;
        self.index_count = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total vertices across stored meshes.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Total indices across stored meshes.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}
