use libc::size_t;

/// Upper bound on the number of values a single `counter_generate` call hands out.
pub const COUNTER_MAX_LEN: size_t = 1 << 16;

/// Allocates `start, start + 1, ...` and stores the buffer address in `*vec`.
///
/// Returns the number of values actually produced, which is `size` capped at
/// [`COUNTER_MAX_LEN`] and cut short before `start + i` would overflow. Callers
/// must read and free using the returned count, never the requested one.
///
/// An empty result still stores a non-null address. A null `*vec` after the
/// call therefore always means the call failed.
///
/// # Safety
///
/// `vec` must be null or valid for a single pointer-sized write. The buffer
/// stored in `*vec` must be released exactly once with [`counter_free`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn counter_generate(
    start: size_t,
    size: size_t,
    vec: *mut *mut size_t,
) -> size_t {
    if vec.is_null() {
        return 0; // no slot to report the buffer through
    }

    let size = size.min(COUNTER_MAX_LEN).min(size_t::MAX - start);
    // Boxed so capacity equals length, which `counter_free` relies on
    let counted: Box<[size_t]> = (start..start + size).collect();

    let ret = counted.len();
    // SAFETY: `vec` is non-null and the caller guarantees it is writable
    unsafe { *vec = Box::into_raw(counted).cast::<size_t>() };

    ret
}

/// Releases a buffer produced by [`counter_generate`]. A null `arr` is ignored.
///
/// # Safety
///
/// `arr` must come from [`counter_generate`] and `size` must be the count that
/// call returned. The buffer must not be used or freed again afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn counter_free(arr: *mut size_t, size: size_t) {
    if arr.is_null() {
        return;
    }

    let slice = std::ptr::slice_from_raw_parts_mut(arr, size);
    // SAFETY: the caller hands back an allocation made by `Box<[size_t]>` of exactly `size` values
    drop(unsafe { Box::from_raw(slice) });
}

/// The cap `counter_generate` applies to every request.
#[unsafe(no_mangle)]
pub extern "C" fn counter_max_len() -> size_t {
    COUNTER_MAX_LEN
}
