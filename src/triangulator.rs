//! The ear slicing driver.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::config::EarcutConfig;
use crate::ear::{is_ear, is_ear_hashed};
use crate::error::EarcutError;
use crate::holes::eliminate_holes;
use crate::node::{NodeId, Nodes};
use crate::repair::{cure_local_intersections, find_split};
use crate::ring::{filter_points, linked_list};
use crate::zorder::{index_curve, ZSpace};
use crate::{hole_ranges, Index};

/// Summary of a triangulation run.
///
/// Degenerate input never fails; it shows up here instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of triangles written to the output.
    pub triangles: usize,
    /// Holes for which no bridge to the outer ring was found.
    pub unmerged_holes: usize,
    /// Vertices left on rings that could neither be clipped nor split.
    pub residual_vertices: usize,
}

impl Report {
    /// Whether every hole was merged and every ring fully clipped.
    pub fn is_complete(&self) -> bool {
        self.unmerged_holes == 0 && self.residual_vertices == 0
    }
}

/// Stage a ring is in when its scan starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    /// plain ear slicing
    Scan,
    /// slicing again after filtering collinear points
    Filtered,
    /// slicing again after curing local self-intersections
    Cured,
}

#[derive(Clone, Copy, Debug)]
struct Job {
    start: NodeId,
    pass: Pass,
    depth: usize,
}

/// Instance of the earcut algorithm.
pub struct Earcut<T: Float> {
    config: EarcutConfig,
    data: Vec<[T; 2]>,
    nodes: Nodes<T>,
    queue: Vec<NodeId>,
    jobs: Vec<Job>,
}

impl<T: Float> Default for Earcut<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Earcut<T> {
    /// Creates a new instance of the earcut algorithm.
    ///
    /// You can reuse a single instance for multiple triangulations to reduce memory allocations.
    pub fn new() -> Self {
        Self::with_config(EarcutConfig::default())
    }

    /// Creates an instance with custom tuning; see [`EarcutConfig`].
    ///
    /// ```
    /// use ringcut::{Earcut, EarcutConfig};
    ///
    /// let config = EarcutConfig::default().with_max_split_depth(8);
    /// let earcut = Earcut::<f64>::with_config(config);
    /// assert_eq!(earcut.config().max_split_depth, 8);
    /// ```
    pub fn with_config(config: EarcutConfig) -> Self {
        Self {
            config,
            data: Vec::new(),
            nodes: Nodes::new(),
            queue: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// The configuration this instance runs with.
    pub fn config(&self) -> &EarcutConfig {
        &self.config
    }

    /// Triangulates a polygon given as flat coordinates.
    ///
    /// `data` holds `dim` numbers per vertex, of which only the first two are used.
    /// `hole_indices` holds the first vertex index of each hole ring; everything
    /// before the first one is the outer ring. Triangles are written to
    /// `triangles_out` as vertex indices, three per triangle, replacing its
    /// previous content. On error `triangles_out` is left empty.
    pub fn earcut<N: Index>(
        &mut self,
        data: &[T],
        hole_indices: &[N],
        dim: usize,
        triangles_out: &mut Vec<N>,
    ) -> Result<Report, EarcutError> {
        triangles_out.clear();
        if dim < 2 {
            return Err(EarcutError::InvalidDimensions(dim));
        }
        if self.config.validate_input {
            validate(data.len(), hole_indices, dim)?;
        }

        self.data.clear();
        self.data
            .extend(data.chunks_exact(dim).map(|coords| [coords[0], coords[1]]));

        let mut report = Report::default();
        if self.data.len() >= 3 {
            if let Err(err) = self.earcut_impl(hole_indices, triangles_out, &mut report) {
                triangles_out.clear();
                return Err(err);
            }
        }
        report.triangles = triangles_out.len() / 3;
        Ok(report)
    }

    fn earcut_impl<N: Index>(
        &mut self,
        hole_indices: &[N],
        triangles_out: &mut Vec<N>,
        report: &mut Report,
    ) -> Result<(), EarcutError> {
        let vertices = self.data.len();
        triangles_out.reserve(vertices + 1);
        self.nodes.reset(vertices / 2 * 3);

        let outer_len = hole_indices
            .first()
            .map_or(vertices, |h| h.into_usize().min(vertices));

        let Some(mut outer) = linked_list(&mut self.nodes, &self.data, 0, outer_len, true) else {
            return Ok(());
        };
        if self.nodes.next(outer) == self.nodes.prev(outer) {
            return Ok(());
        }

        if !hole_indices.is_empty() {
            let (merged, unmerged) = eliminate_holes(
                &mut self.nodes,
                &self.data,
                hole_ranges(hole_indices, vertices),
                outer,
                &mut self.queue,
            );
            outer = merged;
            report.unmerged_holes = unmerged;
        }

        // if the shape is not too simple, use a z-order curve hash over the outer bbox
        let space = if vertices > self.config.hash_threshold {
            ZSpace::from_points(&self.data[..outer_len])
        } else {
            None
        };
        if space.is_some() {
            log::debug!("indexing {vertices} vertices on a z-order curve");
        }

        self.jobs.clear();
        self.jobs.push(Job {
            start: outer,
            pass: Pass::Scan,
            depth: 0,
        });
        while let Some(job) = self.jobs.pop() {
            self.slice(job, space.as_ref(), triangles_out, report)?;
        }
        Ok(())
    }

    /// Main ear slicing loop for one ring; queues follow-up work when it stalls.
    fn slice<N: Index>(
        &mut self,
        job: Job,
        space: Option<&ZSpace<T>>,
        triangles: &mut Vec<N>,
        report: &mut Report,
    ) -> Result<(), EarcutError> {
        let nodes = &mut self.nodes;
        let Job {
            start: mut ear,
            pass,
            depth,
        } = job;

        if pass == Pass::Scan {
            if let Some(space) = space {
                index_curve(nodes, ear, space);
            }
        }

        let mut stop = ear;
        loop {
            let (prev, next) = (nodes.prev(ear), nodes.next(ear));
            if prev == next {
                // fewer than three nodes left
                return Ok(());
            }

            let clip = match space {
                Some(space) => is_ear_hashed(nodes, ear, space),
                None => is_ear(nodes, ear),
            };
            if clip {
                emit(nodes, triangles, prev, ear, next);
                nodes.remove(ear);

                // skipping the next vertex leads to less sliver triangles
                ear = nodes.next(next);
                stop = ear;
                continue;
            }

            ear = next;
            if ear == stop {
                break;
            }
        }

        // a full loop over the remaining ring found no ear
        match pass {
            Pass::Scan => {
                log::trace!("no ear found, filtering ring at vertex {}", nodes.v(ear).i);
                let start = filter_points(nodes, ear, None);
                self.jobs.push(Job {
                    start,
                    pass: Pass::Filtered,
                    depth,
                });
            }
            Pass::Filtered => {
                log::trace!("no ear found, curing local intersections");
                let filtered = filter_points(nodes, ear, None);
                let start = cure_local_intersections(nodes, filtered, triangles);
                self.jobs.push(Job {
                    start,
                    pass: Pass::Cured,
                    depth,
                });
            }
            Pass::Cured => {
                let Some((a, b)) = find_split(nodes, ear) else {
                    let residual = nodes.ring_len(ear);
                    log::warn!("no valid diagonal, leaving {residual} vertices untriangulated");
                    report.residual_vertices += residual;
                    return Ok(());
                };
                if depth >= self.config.max_split_depth {
                    log::warn!("split depth limit of {} reached", self.config.max_split_depth);
                    return Err(EarcutError::SplitDepthExceeded(self.config.max_split_depth));
                }
                log::trace!("splitting ring along {} -> {}", nodes.v(a).i, nodes.v(b).i);

                // split the polygon in two by the diagonal
                let c = nodes.split(a, b);

                // filter colinear points around the cuts
                let end = nodes.next(a);
                let a = filter_points(nodes, a, Some(end));
                let end = nodes.next(c);
                let c = filter_points(nodes, c, Some(end));

                // the job stack is LIFO: queue the second half first
                for start in [c, a] {
                    self.jobs.push(Job {
                        start,
                        pass: Pass::Scan,
                        depth: depth + 1,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Append the triangle `a, b, c` to the output as vertex indices.
pub(crate) fn emit<T: Float, N: Index>(
    nodes: &Nodes<T>,
    triangles: &mut Vec<N>,
    a: NodeId,
    b: NodeId,
    c: NodeId,
) {
    triangles.extend([a, b, c].map(|id| N::from_usize(nodes.v(id).i as usize)));
}

fn validate<N: Index>(len: usize, hole_indices: &[N], dim: usize) -> Result<(), EarcutError> {
    if len % dim != 0 {
        return Err(EarcutError::UnalignedData { len, dim });
    }
    let vertices = len / dim;
    if vertices > 0 && vertices - 1 > N::MAX {
        return Err(EarcutError::TooManyVertices {
            vertices,
            max: N::MAX,
        });
    }
    let mut last = 0;
    for (position, index) in hole_indices.iter().map(|h| h.into_usize()).enumerate() {
        if index > vertices {
            return Err(EarcutError::HoleIndexOutOfRange { index, vertices });
        }
        if index < last {
            return Err(EarcutError::HoleIndicesNotAscending { position });
        }
        last = index;
    }
    Ok(())
}
