//! Flat kernel segments plus a TSS carrying the double-fault stack.
use spin::Lazy;
use x86_64::instructions::segmentation::{Segment, CS, DS, ES, SS};
use x86_64::instructions::tables::load_tss;
use x86_64::structures::gdt::{Descriptor, GlobalDescriptorTable, SegmentSelector};
use x86_64::structures::tss::TaskStateSegment;
use x86_64::VirtAddr;

pub const DOUBLE_FAULT_IST_INDEX: u16 = 0;

/// Stack the CPU switches to on a double fault, so a blown kernel stack
/// still reaches the handler.
#[repr(align(16))]
struct IstStack([u8; IST_STACK_SIZE]);

const IST_STACK_SIZE: usize = 4096 * 4;

impl IstStack {
    /// Stacks grow down: the IST entry is one past the last byte.
    fn top(stack: *const IstStack) -> VirtAddr {
        VirtAddr::from_ptr(stack) + IST_STACK_SIZE as u64
    }
}

static mut DOUBLE_FAULT_STACK: IstStack = IstStack([0; IST_STACK_SIZE]);

static TSS: Lazy<TaskStateSegment> = Lazy::new(|| {
    let mut tss = TaskStateSegment::new();
    // only ever used as an address, never borrowed
    let stack = unsafe { core::ptr::addr_of!(DOUBLE_FAULT_STACK) };
    tss.interrupt_stack_table[usize::from(DOUBLE_FAULT_IST_INDEX)] = IstStack::top(stack);
    tss
});

#[derive(Clone, Copy)]
struct Selectors {
    code: SegmentSelector,
    data: SegmentSelector,
    tss: SegmentSelector,
}

static GDT: Lazy<(GlobalDescriptorTable, Selectors)> = Lazy::new(|| {
    let mut gdt = GlobalDescriptorTable::new();
    let selectors = Selectors {
        code: gdt.append(Descriptor::kernel_code_segment()),
        data: gdt.append(Descriptor::kernel_data_segment()),
        tss: gdt.append(Descriptor::tss_segment(&TSS)),
    };
    (gdt, selectors)
});

/// Load the GDT, reload every segment register and install the TSS.
pub fn init() {
    let (gdt, selectors) = &*GDT;
    gdt.load();

    // SAFETY: the selectors index the GDT loaded just above, which lives in
    // a static for the rest of the kernel's life.
    unsafe {
        CS::set_reg(selectors.code);
        DS::set_reg(selectors.data);
        ES::set_reg(selectors.data);
        SS::set_reg(selectors.data);
        load_tss(selectors.tss);
    }
}
