use std::arch::aarch64::*;

#[inline(always)]
pub unsafe fn load_u8x8<T>(buf: &[T], index: usize) -> uint8x8_t {
    vld1_u8(buf.get_unchecked(index..).as_ptr() as *const u8)
}

#[inline(always)]
pub unsafe fn load_u16x8_widen(buf: &[u8], index: usize) -> uint16x8_t {
    vmovl_u8(load_u8x8(buf, index))
}

#[inline(always)]
pub unsafe fn store_u16x8<T>(buf: &mut [T], index: usize, v: uint16x8_t) {
    vst1q_u16(buf.get_unchecked_mut(index..).as_mut_ptr() as *mut u16, v);
}
