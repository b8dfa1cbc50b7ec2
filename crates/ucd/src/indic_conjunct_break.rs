// Generated from the Unicode Character Database 15.1.0 (DerivedCoreProperties.txt).
// Do not edit by hand, regenerate from the source data instead.

// Values: Consonant = 0, Extend = 1, Linker = 2

pub const INDIC_CONJUNCT_BREAK: &[(u32, u32, u8)] = &[
    (0x0300, 0x036F, 1),
    (0x0483, 0x0489, 1),
    (0x0591, 0x05BD, 1),
    (0x05BF, 0x05BF, 1),
    (0x05C1, 0x05C2, 1),
    (0x05C4, 0x05C5, 1),
    (0x05C7, 0x05C7, 1),
    (0x0610, 0x061A, 1),
    (0x064B, 0x065F, 1),
    (0x0670, 0x0670, 1),
    (0x06D6, 0x06DC, 1),
    (0x06DF, 0x06E4, 1),
    (0x06E7, 0x06E8, 1),
    (0x06EA, 0x06ED, 1),
    (0x0711, 0x0711, 1),
    (0x0730, 0x074A, 1),
    (0x07A6, 0x07B0, 1),
    (0x07EB, 0x07F3, 1),
    (0x07FD, 0x07FD, 1),
    (0x0816, 0x0819, 1),
    (0x081B, 0x0823, 1),
    (0x0825, 0x0827, 1),
    (0x0829, 0x082D, 1),
    (0x0859, 0x085B, 1),
    (0x0898, 0x089F, 1),
    (0x08CA, 0x08E1, 1),
    (0x08E3, 0x0902, 1),
    (0x0915, 0x0939, 0),
    (0x093A, 0x093A, 1),
    (0x093C, 0x093C, 1),
    (0x0941, 0x0948, 1),
    (0x094D, 0x094D, 2),
    (0x0951, 0x0957, 1),
    (0x0958, 0x095F, 0),
    (0x0962, 0x0963, 1),
    (0x0978, 0x097F, 0),
    (0x0981, 0x0981, 1),
    (0x0995, 0x09A8, 0),
    (0x09AA, 0x09B0, 0),
    (0x09B2, 0x09B2, 0),
    (0x09B6, 0x09B9, 0),
    (0x09BC, 0x09BC, 1),
    (0x09BE, 0x09BE, 1),
    (0x09C1, 0x09C4, 1),
    (0x09CD, 0x09CD, 2),
    (0x09D7, 0x09D7, 1),
    (0x09DC, 0x09DD, 0),
    (0x09DF, 0x09DF, 0),
    (0x09E2, 0x09E3, 1),
    (0x09F0, 0x09F1, 0),
    (0x09FE, 0x09FE, 1),
    (0x0A01, 0x0A02, 1),
    (0x0A3C, 0x0A3C, 1),
    (0x0A41, 0x0A42, 1),
    (0x0A47, 0x0A48, 1),
    (0x0A4B, 0x0A4D, 1),
    (0x0A51, 0x0A51, 1),
    (0x0A70, 0x0A71, 1),
    (0x0A75, 0x0A75, 1),
    (0x0A81, 0x0A82, 1),
    (0x0A95, 0x0AA8, 0),
    (0x0AAA, 0x0AB0, 0),
    (0x0AB2, 0x0AB3, 0),
    (0x0AB5, 0x0AB9, 0),
    (0x0ABC, 0x0ABC, 1),
    (0x0AC1, 0x0AC5, 1),
    (0x0AC7, 0x0AC8, 1),
    (0x0ACD, 0x0ACD, 2),
    (0x0AE2, 0x0AE3, 1),
    (0x0AF9, 0x0AF9, 0),
    (0x0AFA, 0x0AFF, 1),
    (0x0B01, 0x0B01, 1),
    (0x0B15, 0x0B28, 0),
    (0x0B2A, 0x0B30, 0),
    (0x0B32, 0x0B33, 0),
    (0x0B35, 0x0B39, 0),
    (0x0B3C, 0x0B3C, 1),
    (0x0B3E, 0x0B3F, 1),
    (0x0B41, 0x0B44, 1),
    (0x0B4D, 0x0B4D, 2),
    (0x0B55, 0x0B57, 1),
    (0x0B5C, 0x0B5D, 0),
    (0x0B5F, 0x0B5F, 0),
    (0x0B62, 0x0B63, 1),
    (0x0B71, 0x0B71, 0),
    (0x0B82, 0x0B82, 1),
    (0x0BBE, 0x0BBE, 1),
    (0x0BC0, 0x0BC0, 1),
    (0x0BCD, 0x0BCD, 1),
    (0x0BD7, 0x0BD7, 1),
    (0x0C00, 0x0C00, 1),
    (0x0C04, 0x0C04, 1),
    (0x0C15, 0x0C28, 0),
    (0x0C2A, 0x0C39, 0),
    (0x0C3C, 0x0C3C, 1),
    (0x0C3E, 0x0C40, 1),
    (0x0C46, 0x0C48, 1),
    (0x0C4A, 0x0C4C, 1),
    (0x0C4D, 0x0C4D, 2),
    (0x0C55, 0x0C56, 1),
    (0x0C58, 0x0C5A, 0),
    (0x0C62, 0x0C63, 1),
    (0x0C81, 0x0C81, 1),
    (0x0CBC, 0x0CBC, 1),
    (0x0CBF, 0x0CBF, 1),
    (0x0CC2, 0x0CC2, 1),
    (0x0CC6, 0x0CC6, 1),
    (0x0CCC, 0x0CCD, 1),
    (0x0CD5, 0x0CD6, 1),
    (0x0CE2, 0x0CE3, 1),
    (0x0D00, 0x0D01, 1),
    (0x0D15, 0x0D3A, 0),
    (0x0D3B, 0x0D3C, 1),
    (0x0D3E, 0x0D3E, 1),
    (0x0D41, 0x0D44, 1),
    (0x0D4D, 0x0D4D, 2),
    (0x0D57, 0x0D57, 1),
    (0x0D62, 0x0D63, 1),
    (0x0D81, 0x0D81, 1),
    (0x0DCA, 0x0DCA, 1),
    (0x0DCF, 0x0DCF, 1),
    (0x0DD2, 0x0DD4, 1),
    (0x0DD6, 0x0DD6, 1),
    (0x0DDF, 0x0DDF, 1),
    (0x0E31, 0x0E31, 1),
    (0x0E34, 0x0E3A, 1),
    (0x0E47, 0x0E4E, 1),
    (0x0EB1, 0x0EB1, 1),
    (0x0EB4, 0x0EBC, 1),
    (0x0EC8, 0x0ECE, 1),
    (0x0F18, 0x0F19, 1),
    (0x0F35, 0x0F35, 1),
    (0x0F37, 0x0F37, 1),
    (0x0F39, 0x0F39, 1),
    (0x0F71, 0x0F7E, 1),
    (0x0F80, 0x0F84, 1),
    (0x0F86, 0x0F87, 1),
    (0x0F8D, 0x0F97, 1),
    (0x0F99, 0x0FBC, 1),
    (0x0FC6, 0x0FC6, 1),
    (0x102D, 0x1030, 1),
    (0x1032, 0x1037, 1),
    (0x1039, 0x103A, 1),
    (0x103D, 0x103E, 1),
    (0x1058, 0x1059, 1),
    (0x105E, 0x1060, 1),
    (0x1071, 0x1074, 1),
    (0x1082, 0x1082, 1),
    (0x1085, 0x1086, 1),
    (0x108D, 0x108D, 1),
    (0x109D, 0x109D, 1),
    (0x135D, 0x135F, 1),
    (0x1712, 0x1714, 1),
    (0x1732, 0x1733, 1),
    (0x1752, 0x1753, 1),
    (0x1772, 0x1773, 1),
    (0x17B4, 0x17B5, 1),
    (0x17B7, 0x17BD, 1),
    (0x17C6, 0x17C6, 1),
    (0x17C9, 0x17D3, 1),
    (0x17DD, 0x17DD, 1),
    (0x180B, 0x180D, 1),
    (0x180F, 0x180F, 1),
    (0x1885, 0x1886, 1),
    (0x18A9, 0x18A9, 1),
    (0x1920, 0x1922, 1),
    (0x1927, 0x1928, 1),
    (0x1932, 0x1932, 1),
    (0x1939, 0x193B, 1),
    (0x1A17, 0x1A18, 1),
    (0x1A1B, 0x1A1B, 1),
    (0x1A56, 0x1A56, 1),
    (0x1A58, 0x1A5E, 1),
    (0x1A60, 0x1A60, 1),
    (0x1A62, 0x1A62, 1),
    (0x1A65, 0x1A6C, 1),
    (0x1A73, 0x1A7C, 1),
    (0x1A7F, 0x1A7F, 1),
    (0x1AB0, 0x1ACE, 1),
    (0x1B00, 0x1B03, 1),
    (0x1B34, 0x1B3A, 1),
    (0x1B3C, 0x1B3C, 1),
    (0x1B42, 0x1B42, 1),
    (0x1B6B, 0x1B73, 1),
    (0x1B80, 0x1B81, 1),
    (0x1BA2, 0x1BA5, 1),
    (0x1BA8, 0x1BA9, 1),
    (0x1BAB, 0x1BAD, 1),
    (0x1BE6, 0x1BE6, 1),
    (0x1BE8, 0x1BE9, 1),
    (0x1BED, 0x1BED, 1),
    (0x1BEF, 0x1BF1, 1),
    (0x1C2C, 0x1C33, 1),
    (0x1C36, 0x1C37, 1),
    (0x1CD0, 0x1CD2, 1),
    (0x1CD4, 0x1CE0, 1),
    (0x1CE2, 0x1CE8, 1),
    (0x1CED, 0x1CED, 1),
    (0x1CF4, 0x1CF4, 1),
    (0x1CF8, 0x1CF9, 1),
    (0x1DC0, 0x1DFF, 1),
    (0x200D, 0x200D, 1),
    (0x20D0, 0x20F0, 1),
    (0x2CEF, 0x2CF1, 1),
    (0x2D7F, 0x2D7F, 1),
    (0x2DE0, 0x2DFF, 1),
    (0x302A, 0x302F, 1),
    (0x3099, 0x309A, 1),
    (0xA66F, 0xA672, 1),
    (0xA674, 0xA67D, 1),
    (0xA69E, 0xA69F, 1),
    (0xA6F0, 0xA6F1, 1),
    (0xA802, 0xA802, 1),
    (0xA806, 0xA806, 1),
    (0xA80B, 0xA80B, 1),
    (0xA825, 0xA826, 1),
    (0xA82C, 0xA82C, 1),
    (0xA8C4, 0xA8C5, 1),
    (0xA8E0, 0xA8F1, 1),
    (0xA8FF, 0xA8FF, 1),
    (0xA926, 0xA92D, 1),
    (0xA947, 0xA951, 1),
    (0xA980, 0xA982, 1),
    (0xA9B3, 0xA9B3, 1),
    (0xA9B6, 0xA9B9, 1),
    (0xA9BC, 0xA9BD, 1),
    (0xA9E5, 0xA9E5, 1),
    (0xAA29, 0xAA2E, 1),
    (0xAA31, 0xAA32, 1),
    (0xAA35, 0xAA36, 1),
    (0xAA43, 0xAA43, 1),
    (0xAA4C, 0xAA4C, 1),
    (0xAA7C, 0xAA7C, 1),
    (0xAAB0, 0xAAB0, 1),
    (0xAAB2, 0xAAB4, 1),
    (0xAAB7, 0xAAB8, 1),
    (0xAABE, 0xAABF, 1),
    (0xAAC1, 0xAAC1, 1),
    (0xAAEC, 0xAAED, 1),
    (0xAAF6, 0xAAF6, 1),
    (0xABE5, 0xABE5, 1),
    (0xABE8, 0xABE8, 1),
    (0xABED, 0xABED, 1),
    (0xFB1E, 0xFB1E, 1),
    (0xFE00, 0xFE0F, 1),
    (0xFE20, 0xFE2F, 1),
    (0xFF9E, 0xFF9F, 1),
    (0x101FD, 0x101FD, 1),
    (0x102E0, 0x102E0, 1),
    (0x10376, 0x1037A, 1),
    (0x10A01, 0x10A03, 1),
    (0x10A05, 0x10A06, 1),
    (0x10A0C, 0x10A0F, 1),
    (0x10A38, 0x10A3A, 1),
    (0x10A3F, 0x10A3F, 1),
    (0x10AE5, 0x10AE6, 1),
    (0x10D24, 0x10D27, 1),
    (0x10EAB, 0x10EAC, 1),
    (0x10EFD, 0x10EFF, 1),
    (0x10F46, 0x10F50, 1),
    (0x10F82, 0x10F85, 1),
    (0x11001, 0x11001, 1),
    (0x11038, 0x11046, 1),
    (0x11070, 0x11070, 1),
    (0x11073, 0x11074, 1),
    (0x1107F, 0x11081, 1),
    (0x110B3, 0x110B6, 1),
    (0x110B9, 0x110BA, 1),
    (0x110C2, 0x110C2, 1),
    (0x11100, 0x11102, 1),
    (0x11127, 0x1112B, 1),
    (0x1112D, 0x11134, 1),
    (0x11173, 0x11173, 1),
    (0x11180, 0x11181, 1),
    (0x111B6, 0x111BE, 1),
    (0x111C9, 0x111CC, 1),
    (0x111CF, 0x111CF, 1),
    (0x1122F, 0x11231, 1),
    (0x11234, 0x11234, 1),
    (0x11236, 0x11237, 1),
    (0x1123E, 0x1123E, 1),
    (0x11241, 0x11241, 1),
    (0x112DF, 0x112DF, 1),
    (0x112E3, 0x112EA, 1),
    (0x11300, 0x11301, 1),
    (0x1133B, 0x1133C, 1),
    (0x1133E, 0x1133E, 1),
    (0x11340, 0x11340, 1),
    (0x11357, 0x11357, 1),
    (0x11366, 0x1136C, 1),
    (0x11370, 0x11374, 1),
    (0x11438, 0x1143F, 1),
    (0x11442, 0x11444, 1),
    (0x11446, 0x11446, 1),
    (0x1145E, 0x1145E, 1),
    (0x114B0, 0x114B0, 1),
    (0x114B3, 0x114B8, 1),
    (0x114BA, 0x114BA, 1),
    (0x114BD, 0x114BD, 1),
    (0x114BF, 0x114C0, 1),
    (0x114C2, 0x114C3, 1),
    (0x115AF, 0x115AF, 1),
    (0x115B2, 0x115B5, 1),
    (0x115BC, 0x115BD, 1),
    (0x115BF, 0x115C0, 1),
    (0x115DC, 0x115DD, 1),
    (0x11633, 0x1163A, 1),
    (0x1163D, 0x1163D, 1),
    (0x1163F, 0x11640, 1),
    (0x116AB, 0x116AB, 1),
    (0x116AD, 0x116AD, 1),
    (0x116B0, 0x116B5, 1),
    (0x116B7, 0x116B7, 1),
    (0x1171D, 0x1171F, 1),
    (0x11722, 0x11725, 1),
    (0x11727, 0x1172B, 1),
    (0x1182F, 0x11837, 1),
    (0x11839, 0x1183A, 1),
    (0x11930, 0x11930, 1),
    (0x1193B, 0x1193C, 1),
    (0x1193E, 0x1193E, 1),
    (0x11943, 0x11943, 1),
    (0x119D4, 0x119D7, 1),
    (0x119DA, 0x119DB, 1),
    (0x119E0, 0x119E0, 1),
    (0x11A01, 0x11A0A, 1),
    (0x11A33, 0x11A38, 1),
    (0x11A3B, 0x11A3E, 1),
    (0x11A47, 0x11A47, 1),
    (0x11A51, 0x11A56, 1),
    (0x11A59, 0x11A5B, 1),
    (0x11A8A, 0x11A96, 1),
    (0x11A98, 0x11A99, 1),
    (0x11C30, 0x11C36, 1),
    (0x11C38, 0x11C3D, 1),
    (0x11C3F, 0x11C3F, 1),
    (0x11C92, 0x11CA7, 1),
    (0x11CAA, 0x11CB0, 1),
    (0x11CB2, 0x11CB3, 1),
    (0x11CB5, 0x11CB6, 1),
    (0x11D31, 0x11D36, 1),
    (0x11D3A, 0x11D3A, 1),
    (0x11D3C, 0x11D3D, 1),
    (0x11D3F, 0x11D45, 1),
    (0x11D47, 0x11D47, 1),
    (0x11D90, 0x11D91, 1),
    (0x11D95, 0x11D95, 1),
    (0x11D97, 0x11D97, 1),
    (0x11EF3, 0x11EF4, 1),
    (0x11F00, 0x11F01, 1),
    (0x11F36, 0x11F3A, 1),
    (0x11F40, 0x11F40, 1),
    (0x11F42, 0x11F42, 1),
    (0x13440, 0x13440, 1),
    (0x13447, 0x13455, 1),
    (0x16AF0, 0x16AF4, 1),
    (0x16B30, 0x16B36, 1),
    (0x16F4F, 0x16F4F, 1),
    (0x16F8F, 0x16F92, 1),
    (0x16FE4, 0x16FE4, 1),
    (0x1BC9D, 0x1BC9E, 1),
    (0x1CF00, 0x1CF2D, 1),
    (0x1CF30, 0x1CF46, 1),
    (0x1D165, 0x1D165, 1),
    (0x1D167, 0x1D169, 1),
    (0x1D16E, 0x1D172, 1),
    (0x1D17B, 0x1D182, 1),
    (0x1D185, 0x1D18B, 1),
    (0x1D1AA, 0x1D1AD, 1),
    (0x1D242, 0x1D244, 1),
    (0x1DA00, 0x1DA36, 1),
    (0x1DA3B, 0x1DA6C, 1),
    (0x1DA75, 0x1DA75, 1),
    (0x1DA84, 0x1DA84, 1),
    (0x1DA9B, 0x1DA9F, 1),
    (0x1DAA1, 0x1DAAF, 1),
    (0x1E000, 0x1E006, 1),
    (0x1E008, 0x1E018, 1),
    (0x1E01B, 0x1E021, 1),
    (0x1E023, 0x1E024, 1),
    (0x1E026, 0x1E02A, 1),
    (0x1E08F, 0x1E08F, 1),
    (0x1E130, 0x1E136, 1),
    (0x1E2AE, 0x1E2AE, 1),
    (0x1E2EC, 0x1E2EF, 1),
    (0x1E4EC, 0x1E4EF, 1),
    (0x1E8D0, 0x1E8D6, 1),
    (0x1E944, 0x1E94A, 1),
    (0x1F3FB, 0x1F3FF, 1),
    (0xE0020, 0xE007F, 1),
    (0xE0100, 0xE01EF, 1),
];
