//! Vertices sorted by degree with counting buckets, as in Batagelj Zaversnik core algorithm.
//!
//! The structure is made of three arrays of indexes:
//! - vert : the vertices sorted by degree
//! - pos : for each vertex its position in vert, so that vert\[pos\[v\]\] == v
//! - bin : for each degree d the position in vert of the first vertex of degree d
//!
//! Building is O(nb_nodes + max_degree), moving a vertex to the previous bucket is O(1).

/// Bucket sorted vertex index
#[derive(Clone, Debug)]
pub struct BucketIndex {
    /// vertices sorted by degree
    vert: Vec<usize>,
    /// position of each vertex in vert
    pos: Vec<usize>,
    /// bin\[d\] is the first slot of bucket d in vert
    bin: Vec<usize>,
} // end of struct BucketIndex

impl BucketIndex {
    /// build buckets from a degree array. Inside a bucket vertices are in increasing rank.
    pub fn new(degrees: &[u32]) -> Self {
        let nb_nodes = degrees.len();
        let max_degree = degrees.iter().copied().max().unwrap_or(0) as usize;
        log::debug!(
            "BucketIndex::new nb_nodes : {}, max degree : {}",
            nb_nodes,
            max_degree
        );
        // count vertices by degree
        let mut bin = vec![0usize; max_degree + 1];
        for d in degrees {
            bin[*d as usize] += 1;
        }
        // counts to start offsets
        let mut start = 0;
        for slot in bin.iter_mut() {
            let num = *slot;
            *slot = start;
            start += num;
        }
        // place vertices, bin[d] is used as insertion cursor
        let mut vert = vec![0usize; nb_nodes];
        let mut pos = vec![0usize; nb_nodes];
        for (v, d) in degrees.iter().enumerate() {
            let d = *d as usize;
            pos[v] = bin[d];
            vert[pos[v]] = v;
            bin[d] += 1;
        }
        // cursors are now at the end of each bucket, shift back to starts
        for d in (1..=max_degree).rev() {
            bin[d] = bin[d - 1];
        }
        bin[0] = 0;
        //
        BucketIndex { vert, pos, bin }
    } // end of new

    /// number of vertices indexed
    pub fn get_nb_nodes(&self) -> usize {
        self.vert.len()
    }

    /// vertex at position i in the sorted array
    #[inline]
    pub fn get_vertex(&self, i: usize) -> usize {
        self.vert[i]
    }

    /// position of vertex v in the sorted array
    #[inline]
    pub fn get_position(&self, v: usize) -> usize {
        self.pos[v]
    }

    /// first position of bucket for degree d
    pub fn get_bucket_start(&self, d: u32) -> usize {
        self.bin[d as usize]
    }

    /// the sorted vertex array
    pub fn get_vertices(&self) -> &[usize] {
        &self.vert
    }

    /// Moves u to the bucket of degree degrees\[u\] - 1 and decrements degrees\[u\].
    ///
    /// u is swapped with the first vertex of its bucket, then the bucket start is advanced
    /// so that u becomes the last vertex of the previous bucket.
    /// degrees must be the array the buckets are kept sorted on and degrees\[u\] must be > 0.
    #[inline]
    pub fn move_down(&mut self, u: usize, degrees: &mut [u32]) {
        let du = degrees[u] as usize;
        let pu = self.pos[u];
        let pw = self.bin[du];
        let w = self.vert[pw];
        if u != w {
            self.pos[u] = pw;
            self.vert[pu] = w;
            self.pos[w] = pu;
            self.vert[pw] = u;
        }
        self.bin[du] += 1;
        degrees[u] -= 1;
    } // end of move_down

    /// checks that vert and pos are inverse permutations and that vertices from position first
    /// are sorted by degree with buckets starting where bin says.
    /// During peeling, first is the number of vertices already peeled.
    pub fn check(&self, degrees: &[u32], first: usize) -> bool {
        for (v, p) in self.pos.iter().enumerate() {
            if self.vert[*p] != v {
                log::error!("BucketIndex::check vertex {} not at its position {}", v, p);
                return false;
            }
        }
        for i in first..self.vert.len() {
            let d = degrees[self.vert[i]];
            if i + 1 < self.vert.len() && degrees[self.vert[i + 1]] < d {
                log::error!("BucketIndex::check not sorted at position {}", i);
                return false;
            }
            // the lowest bucket may begin among already peeled vertices
            if i == first {
                if self.bin[d as usize] > i {
                    log::error!("BucketIndex::check bucket {} starts after {}", d, i);
                    return false;
                }
            } else if degrees[self.vert[i - 1]] < d {
                if self.bin[d as usize] != i {
                    log::error!(
                        "BucketIndex::check bucket {} starts at {} , bin says {}",
                        d,
                        i,
                        self.bin[d as usize]
                    );
                    return false;
                }
            }
        }
        true
    } // end of check

    pub(crate) fn into_vertices(self) -> Vec<usize> {
        self.vert
    }
} // end of impl BucketIndex

//========================================================================================

// end of mod tests
