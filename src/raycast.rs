use tessel_blocks::{AIR, BlockAccess, BlockHitResult, raytrace_block};
use tessel_geom::Vec3;

/// Player reach in blocks.
pub const PICK_REACH: f32 = 8.0;

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn step_of(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Walks the cells along `origin + t * dir` for `t` in `[0, max_dist]` and
/// returns the first non-air cell the segment actually hits, with the face it
/// enters through.
pub fn pick_block(
    access: &impl BlockAccess,
    origin: Vec3,
    dir: Vec3,
    max_dist: f32,
) -> Option<BlockHitResult> {
    let len = dir.length();
    if len < 1e-6 {
        return None;
    }
    let d = dir / len;
    let end = origin + d * max_dist;

    let mut vx = origin.x.floor() as i32;
    let mut vy = origin.y.floor() as i32;
    let mut vz = origin.z.floor() as i32;

    let (stepx, stepy, stepz) = (step_of(d.x), step_of(d.y), step_of(d.z));

    let invx = inv_or_max(d.x);
    let invy = inv_or_max(d.y);
    let invz = inv_or_max(d.z);
    let tdx = if stepx == 0 { f32::MAX } else { invx };
    let tdy = if stepy == 0 { f32::MAX } else { invy };
    let tdz = if stepz == 0 { f32::MAX } else { invz };

    let fx = origin.x - origin.x.floor();
    let fy = origin.y - origin.y.floor();
    let fz = origin.z - origin.z.floor();
    let mut tmx = if stepx > 0 { (1.0 - fx) * invx } else if stepx < 0 { fx * invx } else { f32::MAX };
    let mut tmy = if stepy > 0 { (1.0 - fy) * invy } else if stepy < 0 { fy * invy } else { f32::MAX };
    let mut tmz = if stepz > 0 { (1.0 - fz) * invz } else if stepz < 0 { fz * invz } else { f32::MAX };

    let mut t = 0.0f32;
    for _ in 0..512 {
        if t > max_dist {
            break;
        }
        if access.block_id(vx, vy, vz) != AIR {
            if let Some(hit) = raytrace_block(vx, vy, vz, origin, end) {
                return Some(hit);
            }
        }
        // Step through smallest tMax
        if tmx < tmy {
            if tmx < tmz { vx += stepx; t = tmx; tmx += tdx; } else { vz += stepz; t = tmz; tmz += tdz; }
        } else if tmy < tmz {
            vy += stepy; t = tmy; tmy += tdy;
        } else {
            vz += stepz; t = tmz; tmz += tdz;
        }
    }
    None
}
