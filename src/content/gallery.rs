use crate::gallery::CategoryId;

/// Portfolio media, per category, in display order.
pub const GALLERY: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Machines,
        &[
            "/machine1.png",
            "/machine2.png",
            "/machine3.png",
            "/machine4.png",
            "/machine5.png",
            "/machine6.png",
        ],
    ),
    (
        CategoryId::Books,
        &[
            "/books/1.jpg",
            "/books/2.jpg",
            "/books/3.jpg",
            "/books/4.jpg",
            "/books/5.jpg",
            "/books/6.jpg",
            "/books/7.jpg",
            "/books/8.jpg",
            "/books/9.jpg",
            "/books/10.jpg",
            "/books/11.jpg",
            "/books/12.jpg",
            "/books/13.jpg",
            "/books/14.jpg",
            "/books/15.jpg",
            "/books/16.jpg",
        ],
    ),
    (
        CategoryId::WorkSamples,
        &[
            "/images/IMG-20250712-WA0020.jpg",
            "/images/IMG-20250712-WA0021.jpg",
            "/images/IMG-20250712-WA0019.jpg",
            "/images/IMG-20250712-WA0018.jpg",
            "/images/IMG-20250712-WA0017.jpg",
            "/images/IMG-20250712-WA0016.jpg",
            "/images/IMG-20250712-WA0015.jpg",
            "/images/IMG-20250712-WA0014.jpg",
            "/images/IMG-20250712-WA0013.jpg",
            "/images/IMG-20250712-WA0012.jpg",
            "/images/IMG-20250712-WA0011.jpg",
            "/images/IMG-20250712-WA0010.jpg",
            "/images/IMG-20250712-WA0009.jpg",
            "/images/IMG-20250711-WA0045.jpg",
            "/images/IMG-20250711-WA0044.jpg",
            "/images/IMG-20250711-WA0043.jpg",
            "/images/IMG-20250711-WA0042.jpg",
            "/images/IMG-20250711-WA0041.jpg",
            "/images/IMG-20250711-WA0040.jpg",
            "/images/IMG-20250711-WA0039.jpg",
            "/images/IMG-20250711-WA0038.jpg",
            "/images/IMG-20250711-WA0037.jpg",
            "/images/IMG-20250711-WA0036.jpg",
            "/images/IMG-20250711-WA0035.jpg",
            "/images/IMG-20250711-WA0034.jpg",
            "/images/IMG-20250711-WA0033.jpg",
            "/images/IMG-20250711-WA0032.jpg",
            "/images/IMG-20250711-WA0031.jpg",
            "/images/IMG-20250711-WA0030.jpg",
            "/images/IMG-20250711-WA0029.jpg",
            "/images/IMG-20250711-WA0028.jpg",
            "/images/IMG-20250711-WA0027.jpg",
            "/images/IMG-20250711-WA0021.jpg",
            "/images/IMG-20250711-WA0020.jpg",
            "/images/IMG-20250711-WA0019.jpg",
            "/images/IMG-20250711-WA0018.jpg",
            "/images/IMG-20250711-WA0017.jpg",
            "/images/IMG-20250711-WA0016.jpg",
            "/images/IMG-20250711-WA0015.jpg",
        ],
    ),
    (
        CategoryId::Videos,
        &[
            "/images/VID-20250712-WA0004.mp4",
            "/images/VID-20250712-WA0003.mp4",
            "/images/VID-20250712-WA0002.mp4",
            "/images/VID-20250712-WA0001.mp4",
            "/images/VID-20250711-WA0004.mp4",
            "/images/VID-20250711-WA0003.mp4",
            "/images/VID-20250711-WA0002.mp4",
        ],
    ),
];
