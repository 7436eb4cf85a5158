// Drive enumeration with partitions, mounts and LUKS volumes
#![cfg(unix)]

use super::fake_tree::FakeTree;
use jayinsights::core::system_info::storage::{collect, partition_tree};

fn disk_tree() -> FakeTree {
    let tree = FakeTree::new();

    tree.write("/sys/block/nvme0n1/size", "1953525168\n")
        .write("/sys/block/nvme0n1/device/model", "Samsung SSD 980 PRO 1TB\n")
        .write("/sys/block/nvme0n1/nvme0n1p1/size", "1048576\n")
        .write("/sys/block/nvme0n1/nvme0n1p2/size", "1952474112\n")
        .mkdir("/sys/block/nvme0n1/nvme0n1p2/holders/dm-0")
        .mkdir("/sys/block/nvme0n1/queue");

    tree.write("/sys/block/sda/size", "7814037168\n")
        .write("/sys/block/sda/device/model", "WDC WD40EFRX-68N\n")
        .write("/sys/block/sda/sda1/size", "7814035456\n");

    tree.mkdir("/sys/block/loop0")
        .write("/sys/block/dm-0/dm/name", "luks-from-sysfs\n");

    tree.write(
        "/proc/mounts",
        "sysfs /sys sysfs rw 0 0\n\
         /dev/nvme0n1p1 /boot/efi vfat rw 0 0\n\
         /dev/mapper/luks-1234 / ext4 rw 0 0\n\
         /dev/sda1 /mnt/bulk\\040storage ext4 rw 0 0\n",
    );

    tree
}

#[test]
fn test_drives_with_luks_through_dev_mapper() {
    let tree = disk_tree();
    tree.symlink("/dev/mapper/luks-1234", "../dm-0")
        .write("/dev/mapper/control", "");

    let drives = collect(&tree.root());

    let names: Vec<&str> = drives.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["nvme0n1", "sda"]);
    assert_eq!(drives[0].model, "Samsung SSD 980 PRO 1TB");

    assert_eq!(
        partition_tree(&drives[0]),
        vec![
            "nvme0n1 (931.51 GB)",
            "├─nvme0n1p1 (0.50 GB) /boot/efi",
            "├─nvme0n1p2 (931.01 GB)",
            "  └─luks-1234 (LUKS) /",
        ]
    );
    assert_eq!(
        partition_tree(&drives[1]),
        vec!["sda (3726.02 GB)", "├─sda1 (3726.02 GB) /mnt/bulk storage"]
    );
}

#[test]
fn test_luks_name_falls_back_to_dm_name() {
    let tree = disk_tree();

    let drives = collect(&tree.root());
    let luks = drives[0].partitions[1].luks.as_ref().unwrap();

    assert_eq!(luks.name, "luks-from-sysfs");
    assert_eq!(luks.mount_point, None);
}

#[test]
fn test_no_block_devices() {
    let tree = FakeTree::new();
    assert!(collect(&tree.root()).is_empty());
}

#[test]
fn test_missing_model_and_size() {
    let tree = FakeTree::new();
    tree.mkdir("/sys/block/sdb");

    let drives = collect(&tree.root());
    assert_eq!(drives.len(), 1);
    assert_eq!(drives[0].model, "N/A");
    assert_eq!(partition_tree(&drives[0]), vec!["sdb (N/A)"]);
}
