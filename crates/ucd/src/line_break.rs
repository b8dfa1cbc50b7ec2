// Generated from the Unicode Character Database 15.1.0 (LineBreak.txt).
// Do not edit by hand, regenerate from the source data instead.

// Values: AI = 0, AK = 1, AL = 2, AP = 3, AS = 4, B2 = 5, BA = 6, BB = 7, BK = 8, CB = 9, CJ = 10, CL = 11, CM = 12, CP = 13, CR = 14, EB = 15, EM = 16, EX = 17, GL = 18, H2 = 19, H3 = 20, HL = 21, HY = 22, ID = 23, IN = 24, IS = 25, JL = 26, JT = 27, JV = 28, LF = 29, NL = 30, NS = 31, NU = 32, OP = 33, PO = 34, PR = 35, QU = 36, RI = 37, SA = 38, SG = 39, SP = 40, SY = 41, VF = 42, VI = 43, WJ = 44, ZW = 45, ZWJ = 46

pub const LINE_BREAK: &[(u32, u32, u8)] = &[
    (0x0000, 0x0008, 12),
    (0x0009, 0x0009, 6),
    (0x000A, 0x000A, 29),
    (0x000B, 0x000C, 8),
    (0x000D, 0x000D, 14),
    (0x000E, 0x001F, 12),
    (0x0020, 0x0020, 40),
    (0x0021, 0x0021, 17),
    (0x0022, 0x0022, 36),
    (0x0023, 0x0023, 2),
    (0x0024, 0x0024, 35),
    (0x0025, 0x0025, 34),
    (0x0026, 0x0026, 2),
    (0x0027, 0x0027, 36),
    (0x0028, 0x0028, 33),
    (0x0029, 0x0029, 13),
    (0x002A, 0x002A, 2),
    (0x002B, 0x002B, 35),
    (0x002C, 0x002C, 25),
    (0x002D, 0x002D, 22),
    (0x002E, 0x002E, 25),
    (0x002F, 0x002F, 41),
    (0x0030, 0x0039, 32),
    (0x003A, 0x003B, 25),
    (0x003C, 0x003E, 2),
    (0x003F, 0x003F, 17),
    (0x0040, 0x005A, 2),
    (0x005B, 0x005B, 33),
    (0x005C, 0x005C, 35),
    (0x005D, 0x005D, 13),
    (0x005E, 0x007A, 2),
    (0x007B, 0x007B, 33),
    (0x007C, 0x007C, 6),
    (0x007D, 0x007D, 11),
    (0x007E, 0x007E, 2),
    (0x007F, 0x0084, 12),
    (0x0085, 0x0085, 30),
    (0x0086, 0x009F, 12),
    (0x00A0, 0x00A0, 18),
    (0x00A1, 0x00A1, 33),
    (0x00A2, 0x00A2, 34),
    (0x00A3, 0x00A5, 35),
    (0x00A6, 0x00A6, 2),
    (0x00A7, 0x00A8, 0),
    (0x00A9, 0x00A9, 2),
    (0x00AA, 0x00AA, 0),
    (0x00AB, 0x00AB, 36),
    (0x00AC, 0x00AC, 2),
    (0x00AD, 0x00AD, 6),
    (0x00AE, 0x00AF, 2),
    (0x00B0, 0x00B0, 34),
    (0x00B1, 0x00B1, 35),
    (0x00B2, 0x00B3, 0),
    (0x00B4, 0x00B4, 7),
    (0x00B5, 0x00B5, 2),
    (0x00B6, 0x00BA, 0),
    (0x00BB, 0x00BB, 36),
    (0x00BC, 0x00BE, 0),
    (0x00BF, 0x00BF, 33),
    (0x00C0, 0x00D6, 2),
    (0x00D7, 0x00D7, 0),
    (0x00D8, 0x00F6, 2),
    (0x00F7, 0x00F7, 0),
    (0x00F8, 0x02C6, 2),
    (0x02C7, 0x02C7, 0),
    (0x02C8, 0x02C8, 7),
    (0x02C9, 0x02CB, 0),
    (0x02CC, 0x02CC, 7),
    (0x02CD, 0x02CD, 0),
    (0x02CE, 0x02CF, 2),
    (0x02D0, 0x02D0, 0),
    (0x02D1, 0x02D7, 2),
    (0x02D8, 0x02DB, 0),
    (0x02DC, 0x02DC, 2),
    (0x02DD, 0x02DD, 0),
    (0x02DE, 0x02DE, 2),
    (0x02DF, 0x02DF, 7),
    (0x02E0, 0x02FF, 2),
    (0x0300, 0x034E, 12),
    (0x034F, 0x034F, 18),
    (0x0350, 0x035B, 12),
    (0x035C, 0x0362, 18),
    (0x0363, 0x036F, 12),
    (0x0370, 0x0377, 2),
    (0x037A, 0x037D, 2),
    (0x037E, 0x037E, 25),
    (0x037F, 0x037F, 2),
    (0x0384, 0x038A, 2),
    (0x038C, 0x038C, 2),
    (0x038E, 0x03A1, 2),
    (0x03A3, 0x0482, 2),
    (0x0483, 0x0489, 12),
    (0x048A, 0x052F, 2),
    (0x0531, 0x0556, 2),
    (0x0559, 0x0588, 2),
    (0x0589, 0x0589, 25),
    (0x058A, 0x058A, 6),
    (0x058D, 0x058E, 2),
    (0x058F, 0x058F, 35),
    (0x0591, 0x05BD, 12),
    (0x05BE, 0x05BE, 6),
    (0x05BF, 0x05BF, 12),
    (0x05C0, 0x05C0, 2),
    (0x05C1, 0x05C2, 12),
    (0x05C3, 0x05C3, 2),
    (0x05C4, 0x05C5, 12),
    (0x05C6, 0x05C6, 17),
    (0x05C7, 0x05C7, 12),
    (0x05D0, 0x05EA, 21),
    (0x05EF, 0x05F2, 21),
    (0x05F3, 0x05F4, 2),
    (0x0600, 0x0605, 32),
    (0x0606, 0x0608, 2),
    (0x0609, 0x060B, 34),
    (0x060C, 0x060D, 25),
    (0x060E, 0x060F, 2),
    (0x0610, 0x061A, 12),
    (0x061B, 0x061B, 17),
    (0x061C, 0x061C, 12),
    (0x061D, 0x061F, 17),
    (0x0620, 0x064A, 2),
    (0x064B, 0x065F, 12),
    (0x0660, 0x0669, 32),
    (0x066A, 0x066A, 34),
    (0x066B, 0x066C, 32),
    (0x066D, 0x066F, 2),
    (0x0670, 0x0670, 12),
    (0x0671, 0x06D3, 2),
    (0x06D4, 0x06D4, 17),
    (0x06D5, 0x06D5, 2),
    (0x06D6, 0x06DC, 12),
    (0x06DD, 0x06DD, 32),
    (0x06DE, 0x06DE, 2),
    (0x06DF, 0x06E4, 12),
    (0x06E5, 0x06E6, 2),
    (0x06E7, 0x06E8, 12),
    (0x06E9, 0x06E9, 2),
    (0x06EA, 0x06ED, 12),
    (0x06EE, 0x06EF, 2),
    (0x06F0, 0x06F9, 32),
    (0x06FA, 0x070D, 2),
    (0x070F, 0x0710, 2),
    (0x0711, 0x0711, 12),
    (0x0712, 0x072F, 2),
    (0x0730, 0x074A, 12),
    (0x074D, 0x07A5, 2),
    (0x07A6, 0x07B0, 12),
    (0x07B1, 0x07B1, 2),
    (0x07C0, 0x07C9, 32),
    (0x07CA, 0x07EA, 2),
    (0x07EB, 0x07F3, 12),
    (0x07F4, 0x07F7, 2),
    (0x07F8, 0x07F8, 25),
    (0x07F9, 0x07F9, 17),
    (0x07FA, 0x07FA, 2),
    (0x07FD, 0x07FD, 12),
    (0x07FE, 0x07FF, 35),
    (0x0800, 0x0815, 2),
    (0x0816, 0x0819, 12),
    (0x081A, 0x081A, 2),
    (0x081B, 0x0823, 12),
    (0x0824, 0x0824, 2),
    (0x0825, 0x0827, 12),
    (0x0828, 0x0828, 2),
    (0x0829, 0x082D, 12),
    (0x0830, 0x083E, 2),
    (0x0840, 0x0858, 2),
    (0x0859, 0x085B, 12),
    (0x085E, 0x085E, 2),
    (0x0860, 0x086A, 2),
    (0x0870, 0x088E, 2),
    (0x0890, 0x0891, 32),
    (0x0898, 0x089F, 12),
    (0x08A0, 0x08C9, 2),
    (0x08CA, 0x08E1, 12),
    (0x08E2, 0x08E2, 32),
    (0x08E3, 0x0903, 12),
    (0x0904, 0x0939, 2),
    (0x093A, 0x093C, 12),
    (0x093D, 0x093D, 2),
    (0x093E, 0x094F, 12),
    (0x0950, 0x0950, 2),
    (0x0951, 0x0957, 12),
    (0x0958, 0x0961, 2),
    (0x0962, 0x0963, 12),
    (0x0964, 0x0965, 6),
    (0x0966, 0x096F, 32),
    (0x0970, 0x0980, 2),
    (0x0981, 0x0983, 12),
    (0x0985, 0x098C, 2),
    (0x098F, 0x0990, 2),
    (0x0993, 0x09A8, 2),
    (0x09AA, 0x09B0, 2),
    (0x09B2, 0x09B2, 2),
    (0x09B6, 0x09B9, 2),
    (0x09BC, 0x09BC, 12),
    (0x09BD, 0x09BD, 2),
    (0x09BE, 0x09C4, 12),
    (0x09C7, 0x09C8, 12),
    (0x09CB, 0x09CD, 12),
    (0x09CE, 0x09CE, 2),
    (0x09D7, 0x09D7, 12),
    (0x09DC, 0x09DD, 2),
    (0x09DF, 0x09E1, 2),
    (0x09E2, 0x09E3, 12),
    (0x09E6, 0x09EF, 32),
    (0x09F0, 0x09F1, 2),
    (0x09F2, 0x09F3, 34),
    (0x09F4, 0x09F8, 2),
    (0x09F9, 0x09F9, 34),
    (0x09FA, 0x09FA, 2),
    (0x09FB, 0x09FB, 35),
    (0x09FC, 0x09FD, 2),
    (0x09FE, 0x09FE, 12),
    (0x0A01, 0x0A03, 12),
    (0x0A05, 0x0A0A, 2),
    (0x0A0F, 0x0A10, 2),
    (0x0A13, 0x0A28, 2),
    (0x0A2A, 0x0A30, 2),
    (0x0A32, 0x0A33, 2),
    (0x0A35, 0x0A36, 2),
    (0x0A38, 0x0A39, 2),
    (0x0A3C, 0x0A3C, 12),
    (0x0A3E, 0x0A42, 12),
    (0x0A47, 0x0A48, 12),
    (0x0A4B, 0x0A4D, 12),
    (0x0A51, 0x0A51, 12),
    (0x0A59, 0x0A5C, 2),
    (0x0A5E, 0x0A5E, 2),
    (0x0A66, 0x0A6F, 32),
    (0x0A70, 0x0A71, 12),
    (0x0A72, 0x0A74, 2),
    (0x0A75, 0x0A75, 12),
    (0x0A76, 0x0A76, 2),
    (0x0A81, 0x0A83, 12),
    (0x0A85, 0x0A8D, 2),
    (0x0A8F, 0x0A91, 2),
    (0x0A93, 0x0AA8, 2),
    (0x0AAA, 0x0AB0, 2),
    (0x0AB2, 0x0AB3, 2),
    (0x0AB5, 0x0AB9, 2),
    (0x0ABC, 0x0ABC, 12),
    (0x0ABD, 0x0ABD, 2),
    (0x0ABE, 0x0AC5, 12),
    (0x0AC7, 0x0AC9, 12),
    (0x0ACB, 0x0ACD, 12),
    (0x0AD0, 0x0AD0, 2),
    (0x0AE0, 0x0AE1, 2),
    (0x0AE2, 0x0AE3, 12),
    (0x0AE6, 0x0AEF, 32),
    (0x0AF0, 0x0AF0, 2),
    (0x0AF1, 0x0AF1, 35),
    (0x0AF9, 0x0AF9, 2),
    (0x0AFA, 0x0AFF, 12),
    (0x0B01, 0x0B03, 12),
    (0x0B05, 0x0B0C, 2),
    (0x0B0F, 0x0B10, 2),
    (0x0B13, 0x0B28, 2),
    (0x0B2A, 0x0B30, 2),
    (0x0B32, 0x0B33, 2),
    (0x0B35, 0x0B39, 2),
    (0x0B3C, 0x0B3C, 12),
    (0x0B3D, 0x0B3D, 2),
    (0x0B3E, 0x0B44, 12),
    (0x0B47, 0x0B48, 12),
    (0x0B4B, 0x0B4D, 12),
    (0x0B55, 0x0B57, 12),
    (0x0B5C, 0x0B5D, 2),
    (0x0B5F, 0x0B61, 2),
    (0x0B62, 0x0B63, 12),
    (0x0B66, 0x0B6F, 32),
    (0x0B70, 0x0B77, 2),
    (0x0B82, 0x0B82, 12),
    (0x0B83, 0x0B83, 2),
    (0x0B85, 0x0B8A, 2),
    (0x0B8E, 0x0B90, 2),
    (0x0B92, 0x0B95, 2),
    (0x0B99, 0x0B9A, 2),
    (0x0B9C, 0x0B9C, 2),
    (0x0B9E, 0x0B9F, 2),
    (0x0BA3, 0x0BA4, 2),
    (0x0BA8, 0x0BAA, 2),
    (0x0BAE, 0x0BB9, 2),
    (0x0BBE, 0x0BC2, 12),
    (0x0BC6, 0x0BC8, 12),
    (0x0BCA, 0x0BCD, 12),
    (0x0BD0, 0x0BD0, 2),
    (0x0BD7, 0x0BD7, 12),
    (0x0BE6, 0x0BEF, 32),
    (0x0BF0, 0x0BF8, 2),
    (0x0BF9, 0x0BF9, 35),
    (0x0BFA, 0x0BFA, 2),
    (0x0C00, 0x0C04, 12),
    (0x0C05, 0x0C0C, 2),
    (0x0C0E, 0x0C10, 2),
    (0x0C12, 0x0C28, 2),
    (0x0C2A, 0x0C39, 2),
    (0x0C3C, 0x0C3C, 12),
    (0x0C3D, 0x0C3D, 2),
    (0x0C3E, 0x0C44, 12),
    (0x0C46, 0x0C48, 12),
    (0x0C4A, 0x0C4D, 12),
    (0x0C55, 0x0C56, 12),
    (0x0C58, 0x0C5A, 2),
    (0x0C5D, 0x0C5D, 2),
    (0x0C60, 0x0C61, 2),
    (0x0C62, 0x0C63, 12),
    (0x0C66, 0x0C6F, 32),
    (0x0C77, 0x0C77, 7),
    (0x0C78, 0x0C80, 2),
    (0x0C81, 0x0C83, 12),
    (0x0C84, 0x0C84, 7),
    (0x0C85, 0x0C8C, 2),
    (0x0C8E, 0x0C90, 2),
    (0x0C92, 0x0CA8, 2),
    (0x0CAA, 0x0CB3, 2),
    (0x0CB5, 0x0CB9, 2),
    (0x0CBC, 0x0CBC, 12),
    (0x0CBD, 0x0CBD, 2),
    (0x0CBE, 0x0CC4, 12),
    (0x0CC6, 0x0CC8, 12),
    (0x0CCA, 0x0CCD, 12),
    (0x0CD5, 0x0CD6, 12),
    (0x0CDD, 0x0CDE, 2),
    (0x0CE0, 0x0CE1, 2),
    (0x0CE2, 0x0CE3, 12),
    (0x0CE6, 0x0CEF, 32),
    (0x0CF1, 0x0CF2, 2),
    (0x0CF3, 0x0CF3, 12),
    (0x0D00, 0x0D03, 12),
    (0x0D04, 0x0D0C, 2),
    (0x0D0E, 0x0D10, 2),
    (0x0D12, 0x0D3A, 2),
    (0x0D3B, 0x0D3C, 12),
    (0x0D3D, 0x0D3D, 2),
    (0x0D3E, 0x0D44, 12),
    (0x0D46, 0x0D48, 12),
    (0x0D4A, 0x0D4D, 12),
    (0x0D4E, 0x0D4F, 2),
    (0x0D54, 0x0D56, 2),
    (0x0D57, 0x0D57, 12),
    (0x0D58, 0x0D61, 2),
    (0x0D62, 0x0D63, 12),
    (0x0D66, 0x0D6F, 32),
    (0x0D70, 0x0D78, 2),
    (0x0D79, 0x0D79, 34),
    (0x0D7A, 0x0D7F, 2),
    (0x0D81, 0x0D83, 12),
    (0x0D85, 0x0D96, 2),
    (0x0D9A, 0x0DB1, 2),
    (0x0DB3, 0x0DBB, 2),
    (0x0DBD, 0x0DBD, 2),
    (0x0DC0, 0x0DC6, 2),
    (0x0DCA, 0x0DCA, 12),
    (0x0DCF, 0x0DD4, 12),
    (0x0DD6, 0x0DD6, 12),
    (0x0DD8, 0x0DDF, 12),
    (0x0DE6, 0x0DEF, 32),
    (0x0DF2, 0x0DF3, 12),
    (0x0DF4, 0x0DF4, 2),
    (0x0E01, 0x0E3A, 38),
    (0x0E3F, 0x0E3F, 35),
    (0x0E40, 0x0E4E, 38),
    (0x0E4F, 0x0E4F, 2),
    (0x0E50, 0x0E59, 32),
    (0x0E5A, 0x0E5B, 6),
    (0x0E81, 0x0E82, 38),
    (0x0E84, 0x0E84, 38),
    (0x0E86, 0x0E8A, 38),
    (0x0E8C, 0x0EA3, 38),
    (0x0EA5, 0x0EA5, 38),
    (0x0EA7, 0x0EBD, 38),
    (0x0EC0, 0x0EC4, 38),
    (0x0EC6, 0x0EC6, 38),
    (0x0EC8, 0x0ECE, 38),
    (0x0ED0, 0x0ED9, 32),
    (0x0EDC, 0x0EDF, 38),
    (0x0F00, 0x0F00, 2),
    (0x0F01, 0x0F04, 7),
    (0x0F05, 0x0F05, 2),
    (0x0F06, 0x0F07, 7),
    (0x0F08, 0x0F08, 18),
    (0x0F09, 0x0F0A, 7),
    (0x0F0B, 0x0F0B, 6),
    (0x0F0C, 0x0F0C, 18),
    (0x0F0D, 0x0F11, 17),
    (0x0F12, 0x0F12, 18),
    (0x0F13, 0x0F13, 2),
    (0x0F14, 0x0F14, 17),
    (0x0F15, 0x0F17, 2),
    (0x0F18, 0x0F19, 12),
    (0x0F1A, 0x0F1F, 2),
    (0x0F20, 0x0F29, 32),
    (0x0F2A, 0x0F33, 2),
    (0x0F34, 0x0F34, 6),
    (0x0F35, 0x0F35, 12),
    (0x0F36, 0x0F36, 2),
    (0x0F37, 0x0F37, 12),
    (0x0F38, 0x0F38, 2),
    (0x0F39, 0x0F39, 12),
    (0x0F3A, 0x0F3A, 33),
    (0x0F3B, 0x0F3B, 11),
    (0x0F3C, 0x0F3C, 33),
    (0x0F3D, 0x0F3D, 11),
    (0x0F3E, 0x0F3F, 12),
    (0x0F40, 0x0F47, 2),
    (0x0F49, 0x0F6C, 2),
    (0x0F71, 0x0F7E, 12),
    (0x0F7F, 0x0F7F, 6),
    (0x0F80, 0x0F84, 12),
    (0x0F85, 0x0F85, 6),
    (0x0F86, 0x0F87, 12),
    (0x0F88, 0x0F8C, 2),
    (0x0F8D, 0x0F97, 12),
    (0x0F99, 0x0FBC, 12),
    (0x0FBE, 0x0FBF, 6),
    (0x0FC0, 0x0FC5, 2),
    (0x0FC6, 0x0FC6, 12),
    (0x0FC7, 0x0FCC, 2),
    (0x0FCE, 0x0FCF, 2),
    (0x0FD0, 0x0FD1, 7),
    (0x0FD2, 0x0FD2, 6),
    (0x0FD3, 0x0FD3, 7),
    (0x0FD4, 0x0FD8, 2),
    (0x0FD9, 0x0FDA, 18),
    (0x1000, 0x103F, 38),
    (0x1040, 0x1049, 32),
    (0x104A, 0x104B, 6),
    (0x104C, 0x104F, 2),
    (0x1050, 0x108F, 38),
    (0x1090, 0x1099, 32),
    (0x109A, 0x109F, 38),
    (0x10A0, 0x10C5, 2),
    (0x10C7, 0x10C7, 2),
    (0x10CD, 0x10CD, 2),
    (0x10D0, 0x10FF, 2),
    (0x1100, 0x115F, 26),
    (0x1160, 0x11A7, 28),
    (0x11A8, 0x11FF, 27),
    (0x1200, 0x1248, 2),
    (0x124A, 0x124D, 2),
    (0x1250, 0x1256, 2),
    (0x1258, 0x1258, 2),
    (0x125A, 0x125D, 2),
    (0x1260, 0x1288, 2),
    (0x128A, 0x128D, 2),
    (0x1290, 0x12B0, 2),
    (0x12B2, 0x12B5, 2),
    (0x12B8, 0x12BE, 2),
    (0x12C0, 0x12C0, 2),
    (0x12C2, 0x12C5, 2),
    (0x12C8, 0x12D6, 2),
    (0x12D8, 0x1310, 2),
    (0x1312, 0x1315, 2),
    (0x1318, 0x135A, 2),
    (0x135D, 0x135F, 12),
    (0x1360, 0x1360, 2),
    (0x1361, 0x1361, 6),
    (0x1362, 0x137C, 2),
    (0x1380, 0x1399, 2),
    (0x13A0, 0x13F5, 2),
    (0x13F8, 0x13FD, 2),
    (0x1400, 0x1400, 6),
    (0x1401, 0x167F, 2),
    (0x1680, 0x1680, 6),
    (0x1681, 0x169A, 2),
    (0x169B, 0x169B, 33),
    (0x169C, 0x169C, 11),
    (0x16A0, 0x16EA, 2),
    (0x16EB, 0x16ED, 6),
    (0x16EE, 0x16F8, 2),
    (0x1700, 0x1711, 2),
    (0x1712, 0x1715, 12),
    (0x171F, 0x1731, 2),
    (0x1732, 0x1734, 12),
    (0x1735, 0x1736, 6),
    (0x1740, 0x1751, 2),
    (0x1752, 0x1753, 12),
    (0x1760, 0x176C, 2),
    (0x176E, 0x1770, 2),
    (0x1772, 0x1773, 12),
    (0x1780, 0x17D3, 38),
    (0x17D4, 0x17D5, 6),
    (0x17D6, 0x17D6, 31),
    (0x17D7, 0x17D7, 38),
    (0x17D8, 0x17D8, 6),
    (0x17D9, 0x17D9, 2),
    (0x17DA, 0x17DA, 6),
    (0x17DB, 0x17DB, 35),
    (0x17DC, 0x17DD, 38),
    (0x17E0, 0x17E9, 32),
    (0x17F0, 0x17F9, 2),
    (0x1800, 0x1801, 2),
    (0x1802, 0x1803, 17),
    (0x1804, 0x1805, 6),
    (0x1806, 0x1806, 7),
    (0x1807, 0x1807, 2),
    (0x1808, 0x1809, 17),
    (0x180A, 0x180A, 2),
    (0x180B, 0x180D, 12),
    (0x180E, 0x180E, 18),
    (0x180F, 0x180F, 12),
    (0x1810, 0x1819, 32),
    (0x1820, 0x1878, 2),
    (0x1880, 0x1884, 2),
    (0x1885, 0x1886, 12),
    (0x1887, 0x18A8, 2),
    (0x18A9, 0x18A9, 12),
    (0x18AA, 0x18AA, 2),
    (0x18B0, 0x18F5, 2),
    (0x1900, 0x191E, 2),
    (0x1920, 0x192B, 12),
    (0x1930, 0x193B, 12),
    (0x1940, 0x1940, 2),
    (0x1944, 0x1945, 17),
    (0x1946, 0x194F, 32),
    (0x1950, 0x196D, 38),
    (0x1970, 0x1974, 38),
    (0x1980, 0x19AB, 38),
    (0x19B0, 0x19C9, 38),
    (0x19D0, 0x19D9, 32),
    (0x19DA, 0x19DA, 38),
    (0x19DE, 0x19DF, 38),
    (0x19E0, 0x1A16, 2),
    (0x1A17, 0x1A1B, 12),
    (0x1A1E, 0x1A1F, 2),
    (0x1A20, 0x1A5E, 38),
    (0x1A60, 0x1A7C, 38),
    (0x1A7F, 0x1A7F, 12),
    (0x1A80, 0x1A89, 32),
    (0x1A90, 0x1A99, 32),
    (0x1AA0, 0x1AAD, 38),
    (0x1AB0, 0x1ACE, 12),
    (0x1B00, 0x1B04, 12),
    (0x1B05, 0x1B33, 1),
    (0x1B34, 0x1B43, 12),
    (0x1B44, 0x1B44, 43),
    (0x1B45, 0x1B4C, 1),
    (0x1B50, 0x1B59, 23),
    (0x1B5A, 0x1B5B, 6),
    (0x1B5C, 0x1B5C, 23),
    (0x1B5D, 0x1B60, 6),
    (0x1B61, 0x1B6A, 23),
    (0x1B6B, 0x1B73, 12),
    (0x1B74, 0x1B7C, 23),
    (0x1B7D, 0x1B7E, 6),
    (0x1B80, 0x1B82, 12),
    (0x1B83, 0x1BA0, 2),
    (0x1BA1, 0x1BAD, 12),
    (0x1BAE, 0x1BAF, 2),
    (0x1BB0, 0x1BB9, 32),
    (0x1BBA, 0x1BBF, 2),
    (0x1BC0, 0x1BE5, 4),
    (0x1BE6, 0x1BF1, 12),
    (0x1BF2, 0x1BF3, 42),
    (0x1BFC, 0x1C23, 2),
    (0x1C24, 0x1C37, 12),
    (0x1C3B, 0x1C3F, 6),
    (0x1C40, 0x1C49, 32),
    (0x1C4D, 0x1C4F, 2),
    (0x1C50, 0x1C59, 32),
    (0x1C5A, 0x1C7D, 2),
    (0x1C7E, 0x1C7F, 6),
    (0x1C80, 0x1C88, 2),
    (0x1C90, 0x1CBA, 2),
    (0x1CBD, 0x1CC7, 2),
    (0x1CD0, 0x1CD2, 12),
    (0x1CD3, 0x1CD3, 2),
    (0x1CD4, 0x1CE8, 12),
    (0x1CE9, 0x1CEC, 2),
    (0x1CED, 0x1CED, 12),
    (0x1CEE, 0x1CF3, 2),
    (0x1CF4, 0x1CF4, 12),
    (0x1CF5, 0x1CF6, 2),
    (0x1CF7, 0x1CF9, 12),
    (0x1CFA, 0x1CFA, 2),
    (0x1D00, 0x1DBF, 2),
    (0x1DC0, 0x1DCC, 12),
    (0x1DCD, 0x1DCD, 18),
    (0x1DCE, 0x1DFB, 12),
    (0x1DFC, 0x1DFC, 18),
    (0x1DFD, 0x1DFF, 12),
    (0x1E00, 0x1F15, 2),
    (0x1F18, 0x1F1D, 2),
    (0x1F20, 0x1F45, 2),
    (0x1F48, 0x1F4D, 2),
    (0x1F50, 0x1F57, 2),
    (0x1F59, 0x1F59, 2),
    (0x1F5B, 0x1F5B, 2),
    (0x1F5D, 0x1F5D, 2),
    (0x1F5F, 0x1F7D, 2),
    (0x1F80, 0x1FB4, 2),
    (0x1FB6, 0x1FC4, 2),
    (0x1FC6, 0x1FD3, 2),
    (0x1FD6, 0x1FDB, 2),
    (0x1FDD, 0x1FEF, 2),
    (0x1FF2, 0x1FF4, 2),
    (0x1FF6, 0x1FFC, 2),
    (0x1FFD, 0x1FFD, 7),
    (0x1FFE, 0x1FFE, 2),
    (0x2000, 0x2006, 6),
    (0x2007, 0x2007, 18),
    (0x2008, 0x200A, 6),
    (0x200B, 0x200B, 45),
    (0x200C, 0x200C, 12),
    (0x200D, 0x200D, 46),
    (0x200E, 0x200F, 12),
    (0x2010, 0x2010, 6),
    (0x2011, 0x2011, 18),
    (0x2012, 0x2013, 6),
    (0x2014, 0x2014, 5),
    (0x2015, 0x2016, 0),
    (0x2017, 0x2017, 2),
    (0x2018, 0x2019, 36),
    (0x201A, 0x201A, 33),
    (0x201B, 0x201D, 36),
    (0x201E, 0x201E, 33),
    (0x201F, 0x201F, 36),
    (0x2020, 0x2021, 0),
    (0x2022, 0x2023, 2),
    (0x2024, 0x2026, 24),
    (0x2027, 0x2027, 6),
    (0x2028, 0x2029, 8),
    (0x202A, 0x202E, 12),
    (0x202F, 0x202F, 18),
    (0x2030, 0x2037, 34),
    (0x2038, 0x2038, 2),
    (0x2039, 0x203A, 36),
    (0x203B, 0x203B, 0),
    (0x203C, 0x203D, 31),
    (0x203E, 0x2043, 2),
    (0x2044, 0x2044, 25),
    (0x2045, 0x2045, 33),
    (0x2046, 0x2046, 11),
    (0x2047, 0x2049, 31),
    (0x204A, 0x2055, 2),
    (0x2056, 0x2056, 6),
    (0x2057, 0x2057, 34),
    (0x2058, 0x205B, 6),
    (0x205C, 0x205C, 2),
    (0x205D, 0x205F, 6),
    (0x2060, 0x2060, 44),
    (0x2061, 0x2064, 2),
    (0x2066, 0x206F, 12),
    (0x2070, 0x2071, 2),
    (0x2074, 0x2074, 0),
    (0x2075, 0x207C, 2),
    (0x207D, 0x207D, 33),
    (0x207E, 0x207E, 11),
    (0x207F, 0x207F, 0),
    (0x2080, 0x2080, 2),
    (0x2081, 0x2084, 0),
    (0x2085, 0x208C, 2),
    (0x208D, 0x208D, 33),
    (0x208E, 0x208E, 11),
    (0x2090, 0x209C, 2),
    (0x20A0, 0x20A6, 35),
    (0x20A7, 0x20A7, 34),
    (0x20A8, 0x20B5, 35),
    (0x20B6, 0x20B6, 34),
    (0x20B7, 0x20BA, 35),
    (0x20BB, 0x20BB, 34),
    (0x20BC, 0x20BD, 35),
    (0x20BE, 0x20BE, 34),
    (0x20BF, 0x20BF, 35),
    (0x20C0, 0x20C0, 34),
    (0x20C1, 0x20CF, 35),
    (0x20D0, 0x20F0, 12),
    (0x2100, 0x2102, 2),
    (0x2103, 0x2103, 34),
    (0x2104, 0x2104, 2),
    (0x2105, 0x2105, 0),
    (0x2106, 0x2108, 2),
    (0x2109, 0x2109, 34),
    (0x210A, 0x2112, 2),
    (0x2113, 0x2113, 0),
    (0x2114, 0x2115, 2),
    (0x2116, 0x2116, 35),
    (0x2117, 0x2120, 2),
    (0x2121, 0x2122, 0),
    (0x2123, 0x212A, 2),
    (0x212B, 0x212B, 0),
    (0x212C, 0x2153, 2),
    (0x2154, 0x2155, 0),
    (0x2156, 0x215A, 2),
    (0x215B, 0x215B, 0),
    (0x215C, 0x215D, 2),
    (0x215E, 0x215E, 0),
    (0x215F, 0x215F, 2),
    (0x2160, 0x216B, 0),
    (0x216C, 0x216F, 2),
    (0x2170, 0x2179, 0),
    (0x217A, 0x2188, 2),
    (0x2189, 0x2189, 0),
    (0x218A, 0x218B, 2),
    (0x2190, 0x2199, 0),
    (0x219A, 0x21D1, 2),
    (0x21D2, 0x21D2, 0),
    (0x21D3, 0x21D3, 2),
    (0x21D4, 0x21D4, 0),
    (0x21D5, 0x21FF, 2),
    (0x2200, 0x2200, 0),
    (0x2201, 0x2201, 2),
    (0x2202, 0x2203, 0),
    (0x2204, 0x2206, 2),
    (0x2207, 0x2208, 0),
    (0x2209, 0x220A, 2),
    (0x220B, 0x220B, 0),
    (0x220C, 0x220E, 2),
    (0x220F, 0x220F, 0),
    (0x2210, 0x2210, 2),
    (0x2211, 0x2211, 0),
    (0x2212, 0x2213, 35),
    (0x2214, 0x2214, 2),
    (0x2215, 0x2215, 0),
    (0x2216, 0x2219, 2),
    (0x221A, 0x221A, 0),
    (0x221B, 0x221C, 2),
    (0x221D, 0x2220, 0),
    (0x2221, 0x2222, 2),
    (0x2223, 0x2223, 0),
    (0x2224, 0x2224, 2),
    (0x2225, 0x2225, 0),
    (0x2226, 0x2226, 2),
    (0x2227, 0x222C, 0),
    (0x222D, 0x222D, 2),
    (0x222E, 0x222E, 0),
    (0x222F, 0x2233, 2),
    (0x2234, 0x2237, 0),
    (0x2238, 0x223B, 2),
    (0x223C, 0x223D, 0),
    (0x223E, 0x2247, 2),
    (0x2248, 0x2248, 0),
    (0x2249, 0x224B, 2),
    (0x224C, 0x224C, 0),
    (0x224D, 0x2251, 2),
    (0x2252, 0x2252, 0),
    (0x2253, 0x225F, 2),
    (0x2260, 0x2261, 0),
    (0x2262, 0x2263, 2),
    (0x2264, 0x2267, 0),
    (0x2268, 0x2269, 2),
    (0x226A, 0x226B, 0),
    (0x226C, 0x226D, 2),
    (0x226E, 0x226F, 0),
    (0x2270, 0x2281, 2),
    (0x2282, 0x2283, 0),
    (0x2284, 0x2285, 2),
    (0x2286, 0x2287, 0),
    (0x2288, 0x2294, 2),
    (0x2295, 0x2295, 0),
    (0x2296, 0x2298, 2),
    (0x2299, 0x2299, 0),
    (0x229A, 0x22A4, 2),
    (0x22A5, 0x22A5, 0),
    (0x22A6, 0x22BE, 2),
    (0x22BF, 0x22BF, 0),
    (0x22C0, 0x22EE, 2),
    (0x22EF, 0x22EF, 24),
    (0x22F0, 0x2307, 2),
    (0x2308, 0x2308, 33),
    (0x2309, 0x2309, 11),
    (0x230A, 0x230A, 33),
    (0x230B, 0x230B, 11),
    (0x230C, 0x2311, 2),
    (0x2312, 0x2312, 0),
    (0x2313, 0x2319, 2),
    (0x231A, 0x231B, 23),
    (0x231C, 0x2328, 2),
    (0x2329, 0x2329, 33),
    (0x232A, 0x232A, 11),
    (0x232B, 0x23EF, 2),
    (0x23F0, 0x23F3, 23),
    (0x23F4, 0x2426, 2),
    (0x2440, 0x244A, 2),
    (0x2460, 0x24FE, 0),
    (0x24FF, 0x24FF, 2),
    (0x2500, 0x254B, 0),
    (0x254C, 0x254F, 2),
    (0x2550, 0x2574, 0),
    (0x2575, 0x257F, 2),
    (0x2580, 0x258F, 0),
    (0x2590, 0x2591, 2),
    (0x2592, 0x2595, 0),
    (0x2596, 0x259F, 2),
    (0x25A0, 0x25A1, 0),
    (0x25A2, 0x25A2, 2),
    (0x25A3, 0x25A9, 0),
    (0x25AA, 0x25B1, 2),
    (0x25B2, 0x25B3, 0),
    (0x25B4, 0x25B5, 2),
    (0x25B6, 0x25B7, 0),
    (0x25B8, 0x25BB, 2),
    (0x25BC, 0x25BD, 0),
    (0x25BE, 0x25BF, 2),
    (0x25C0, 0x25C1, 0),
    (0x25C2, 0x25C5, 2),
    (0x25C6, 0x25C8, 0),
    (0x25C9, 0x25CA, 2),
    (0x25CB, 0x25CB, 0),
    (0x25CC, 0x25CD, 2),
    (0x25CE, 0x25D1, 0),
    (0x25D2, 0x25E1, 2),
    (0x25E2, 0x25E5, 0),
    (0x25E6, 0x25EE, 2),
    (0x25EF, 0x25EF, 0),
    (0x25F0, 0x25FF, 2),
    (0x2600, 0x2603, 23),
    (0x2604, 0x2604, 2),
    (0x2605, 0x2606, 0),
    (0x2607, 0x2608, 2),
    (0x2609, 0x2609, 0),
    (0x260A, 0x260D, 2),
    (0x260E, 0x260F, 0),
    (0x2610, 0x2613, 2),
    (0x2614, 0x2615, 23),
    (0x2616, 0x2617, 0),
    (0x2618, 0x2618, 23),
    (0x2619, 0x2619, 2),
    (0x261A, 0x261C, 23),
    (0x261D, 0x261D, 15),
    (0x261E, 0x261F, 23),
    (0x2620, 0x2638, 2),
    (0x2639, 0x263B, 23),
    (0x263C, 0x263F, 2),
    (0x2640, 0x2640, 0),
    (0x2641, 0x2641, 2),
    (0x2642, 0x2642, 0),
    (0x2643, 0x265F, 2),
    (0x2660, 0x2661, 0),
    (0x2662, 0x2662, 2),
    (0x2663, 0x2665, 0),
    (0x2666, 0x2666, 2),
    (0x2667, 0x2667, 0),
    (0x2668, 0x2668, 23),
    (0x2669, 0x266A, 0),
    (0x266B, 0x266B, 2),
    (0x266C, 0x266D, 0),
    (0x266E, 0x266E, 2),
    (0x266F, 0x266F, 0),
    (0x2670, 0x267E, 2),
    (0x267F, 0x267F, 23),
    (0x2680, 0x269D, 2),
    (0x269E, 0x269F, 0),
    (0x26A0, 0x26BC, 2),
    (0x26BD, 0x26C8, 23),
    (0x26C9, 0x26CC, 0),
    (0x26CD, 0x26CD, 23),
    (0x26CE, 0x26CE, 2),
    (0x26CF, 0x26D1, 23),
    (0x26D2, 0x26D2, 0),
    (0x26D3, 0x26D4, 23),
    (0x26D5, 0x26D7, 0),
    (0x26D8, 0x26D9, 23),
    (0x26DA, 0x26DB, 0),
    (0x26DC, 0x26DC, 23),
    (0x26DD, 0x26DE, 0),
    (0x26DF, 0x26E1, 23),
    (0x26E2, 0x26E2, 2),
    (0x26E3, 0x26E3, 0),
    (0x26E4, 0x26E7, 2),
    (0x26E8, 0x26E9, 0),
    (0x26EA, 0x26EA, 23),
    (0x26EB, 0x26F0, 0),
    (0x26F1, 0x26F5, 23),
    (0x26F6, 0x26F6, 0),
    (0x26F7, 0x26F8, 23),
    (0x26F9, 0x26F9, 15),
    (0x26FA, 0x26FA, 23),
    (0x26FB, 0x26FC, 0),
    (0x26FD, 0x2704, 23),
    (0x2705, 0x2707, 2),
    (0x2708, 0x2709, 23),
    (0x270A, 0x270D, 15),
    (0x270E, 0x2756, 2),
    (0x2757, 0x2757, 0),
    (0x2758, 0x275A, 2),
    (0x275B, 0x2760, 36),
    (0x2761, 0x2761, 2),
    (0x2762, 0x2763, 17),
    (0x2764, 0x2764, 23),
    (0x2765, 0x2767, 2),
    (0x2768, 0x2768, 33),
    (0x2769, 0x2769, 11),
    (0x276A, 0x276A, 33),
    (0x276B, 0x276B, 11),
    (0x276C, 0x276C, 33),
    (0x276D, 0x276D, 11),
    (0x276E, 0x276E, 33),
    (0x276F, 0x276F, 11),
    (0x2770, 0x2770, 33),
    (0x2771, 0x2771, 11),
    (0x2772, 0x2772, 33),
    (0x2773, 0x2773, 11),
    (0x2774, 0x2774, 33),
    (0x2775, 0x2775, 11),
    (0x2776, 0x2793, 0),
    (0x2794, 0x27C4, 2),
    (0x27C5, 0x27C5, 33),
    (0x27C6, 0x27C6, 11),
    (0x27C7, 0x27E5, 2),
    (0x27E6, 0x27E6, 33),
    (0x27E7, 0x27E7, 11),
    (0x27E8, 0x27E8, 33),
    (0x27E9, 0x27E9, 11),
    (0x27EA, 0x27EA, 33),
    (0x27EB, 0x27EB, 11),
    (0x27EC, 0x27EC, 33),
    (0x27ED, 0x27ED, 11),
    (0x27EE, 0x27EE, 33),
    (0x27EF, 0x27EF, 11),
    (0x27F0, 0x2982, 2),
    (0x2983, 0x2983, 33),
    (0x2984, 0x2984, 11),
    (0x2985, 0x2985, 33),
    (0x2986, 0x2986, 11),
    (0x2987, 0x2987, 33),
    (0x2988, 0x2988, 11),
    (0x2989, 0x2989, 33),
    (0x298A, 0x298A, 11),
    (0x298B, 0x298B, 33),
    (0x298C, 0x298C, 11),
    (0x298D, 0x298D, 33),
    (0x298E, 0x298E, 11),
    (0x298F, 0x298F, 33),
    (0x2990, 0x2990, 11),
    (0x2991, 0x2991, 33),
    (0x2992, 0x2992, 11),
    (0x2993, 0x2993, 33),
    (0x2994, 0x2994, 11),
    (0x2995, 0x2995, 33),
    (0x2996, 0x2996, 11),
    (0x2997, 0x2997, 33),
    (0x2998, 0x2998, 11),
    (0x2999, 0x29D7, 2),
    (0x29D8, 0x29D8, 33),
    (0x29D9, 0x29D9, 11),
    (0x29DA, 0x29DA, 33),
    (0x29DB, 0x29DB, 11),
    (0x29DC, 0x29FB, 2),
    (0x29FC, 0x29FC, 33),
    (0x29FD, 0x29FD, 11),
    (0x29FE, 0x2B54, 2),
    (0x2B55, 0x2B59, 0),
    (0x2B5A, 0x2B73, 2),
    (0x2B76, 0x2B95, 2),
    (0x2B97, 0x2CEE, 2),
    (0x2CEF, 0x2CF1, 12),
    (0x2CF2, 0x2CF3, 2),
    (0x2CF9, 0x2CF9, 17),
    (0x2CFA, 0x2CFC, 6),
    (0x2CFD, 0x2CFD, 2),
    (0x2CFE, 0x2CFE, 17),
    (0x2CFF, 0x2CFF, 6),
    (0x2D00, 0x2D25, 2),
    (0x2D27, 0x2D27, 2),
    (0x2D2D, 0x2D2D, 2),
    (0x2D30, 0x2D67, 2),
    (0x2D6F, 0x2D6F, 2),
    (0x2D70, 0x2D70, 6),
    (0x2D7F, 0x2D7F, 12),
    (0x2D80, 0x2D96, 2),
    (0x2DA0, 0x2DA6, 2),
    (0x2DA8, 0x2DAE, 2),
    (0x2DB0, 0x2DB6, 2),
    (0x2DB8, 0x2DBE, 2),
    (0x2DC0, 0x2DC6, 2),
    (0x2DC8, 0x2DCE, 2),
    (0x2DD0, 0x2DD6, 2),
    (0x2DD8, 0x2DDE, 2),
    (0x2DE0, 0x2DFF, 12),
    (0x2E00, 0x2E0D, 36),
    (0x2E0E, 0x2E15, 6),
    (0x2E16, 0x2E16, 2),
    (0x2E17, 0x2E17, 6),
    (0x2E18, 0x2E18, 33),
    (0x2E19, 0x2E19, 6),
    (0x2E1A, 0x2E1B, 2),
    (0x2E1C, 0x2E1D, 36),
    (0x2E1E, 0x2E1F, 2),
    (0x2E20, 0x2E21, 36),
    (0x2E22, 0x2E22, 33),
    (0x2E23, 0x2E23, 11),
    (0x2E24, 0x2E24, 33),
    (0x2E25, 0x2E25, 11),
    (0x2E26, 0x2E26, 33),
    (0x2E27, 0x2E27, 11),
    (0x2E28, 0x2E28, 33),
    (0x2E29, 0x2E29, 11),
    (0x2E2A, 0x2E2D, 6),
    (0x2E2E, 0x2E2E, 17),
    (0x2E2F, 0x2E2F, 2),
    (0x2E30, 0x2E31, 6),
    (0x2E32, 0x2E32, 2),
    (0x2E33, 0x2E34, 6),
    (0x2E35, 0x2E39, 2),
    (0x2E3A, 0x2E3B, 5),
    (0x2E3C, 0x2E3E, 6),
    (0x2E3F, 0x2E3F, 2),
    (0x2E40, 0x2E41, 6),
    (0x2E42, 0x2E42, 33),
    (0x2E43, 0x2E4A, 6),
    (0x2E4B, 0x2E4B, 2),
    (0x2E4C, 0x2E4C, 6),
    (0x2E4D, 0x2E4D, 2),
    (0x2E4E, 0x2E4F, 6),
    (0x2E50, 0x2E52, 2),
    (0x2E53, 0x2E54, 17),
    (0x2E55, 0x2E55, 33),
    (0x2E56, 0x2E56, 11),
    (0x2E57, 0x2E57, 33),
    (0x2E58, 0x2E58, 11),
    (0x2E59, 0x2E59, 33),
    (0x2E5A, 0x2E5A, 11),
    (0x2E5B, 0x2E5B, 33),
    (0x2E5C, 0x2E5C, 11),
    (0x2E5D, 0x2E5D, 6),
    (0x2E80, 0x2E99, 23),
    (0x2E9B, 0x2EF3, 23),
    (0x2F00, 0x2FD5, 23),
    (0x2FF0, 0x2FFF, 23),
    (0x3000, 0x3000, 6),
    (0x3001, 0x3002, 11),
    (0x3003, 0x3004, 23),
    (0x3005, 0x3005, 31),
    (0x3006, 0x3007, 23),
    (0x3008, 0x3008, 33),
    (0x3009, 0x3009, 11),
    (0x300A, 0x300A, 33),
    (0x300B, 0x300B, 11),
    (0x300C, 0x300C, 33),
    (0x300D, 0x300D, 11),
    (0x300E, 0x300E, 33),
    (0x300F, 0x300F, 11),
    (0x3010, 0x3010, 33),
    (0x3011, 0x3011, 11),
    (0x3012, 0x3013, 23),
    (0x3014, 0x3014, 33),
    (0x3015, 0x3015, 11),
    (0x3016, 0x3016, 33),
    (0x3017, 0x3017, 11),
    (0x3018, 0x3018, 33),
    (0x3019, 0x3019, 11),
    (0x301A, 0x301A, 33),
    (0x301B, 0x301B, 11),
    (0x301C, 0x301C, 31),
    (0x301D, 0x301D, 33),
    (0x301E, 0x301F, 11),
    (0x3020, 0x3029, 23),
    (0x302A, 0x302F, 12),
    (0x3030, 0x3034, 23),
    (0x3035, 0x3035, 12),
    (0x3036, 0x303A, 23),
    (0x303B, 0x303C, 31),
    (0x303D, 0x303F, 23),
    (0x3041, 0x3041, 10),
    (0x3042, 0x3042, 23),
    (0x3043, 0x3043, 10),
    (0x3044, 0x3044, 23),
    (0x3045, 0x3045, 10),
    (0x3046, 0x3046, 23),
    (0x3047, 0x3047, 10),
    (0x3048, 0x3048, 23),
    (0x3049, 0x3049, 10),
    (0x304A, 0x3062, 23),
    (0x3063, 0x3063, 10),
    (0x3064, 0x3082, 23),
    (0x3083, 0x3083, 10),
    (0x3084, 0x3084, 23),
    (0x3085, 0x3085, 10),
    (0x3086, 0x3086, 23),
    (0x3087, 0x3087, 10),
    (0x3088, 0x308D, 23),
    (0x308E, 0x308E, 10),
    (0x308F, 0x3094, 23),
    (0x3095, 0x3096, 10),
    (0x3099, 0x309A, 12),
    (0x309B, 0x309E, 31),
    (0x309F, 0x309F, 23),
    (0x30A0, 0x30A0, 31),
    (0x30A1, 0x30A1, 10),
    (0x30A2, 0x30A2, 23),
    (0x30A3, 0x30A3, 10),
    (0x30A4, 0x30A4, 23),
    (0x30A5, 0x30A5, 10),
    (0x30A6, 0x30A6, 23),
    (0x30A7, 0x30A7, 10),
    (0x30A8, 0x30A8, 23),
    (0x30A9, 0x30A9, 10),
    (0x30AA, 0x30C2, 23),
    (0x30C3, 0x30C3, 10),
    (0x30C4, 0x30E2, 23),
    (0x30E3, 0x30E3, 10),
    (0x30E4, 0x30E4, 23),
    (0x30E5, 0x30E5, 10),
    (0x30E6, 0x30E6, 23),
    (0x30E7, 0x30E7, 10),
    (0x30E8, 0x30ED, 23),
    (0x30EE, 0x30EE, 10),
    (0x30EF, 0x30F4, 23),
    (0x30F5, 0x30F6, 10),
    (0x30F7, 0x30FA, 23),
    (0x30FB, 0x30FB, 31),
    (0x30FC, 0x30FC, 10),
    (0x30FD, 0x30FE, 31),
    (0x30FF, 0x30FF, 23),
    (0x3105, 0x312F, 23),
    (0x3131, 0x318E, 23),
    (0x3190, 0x31E3, 23),
    (0x31EF, 0x31EF, 23),
    (0x31F0, 0x31FF, 10),
    (0x3200, 0x321E, 23),
    (0x3220, 0x3247, 23),
    (0x3248, 0x324F, 0),
    (0x3250, 0x4DBF, 23),
    (0x4DC0, 0x4DFF, 2),
    (0x4E00, 0xA014, 23),
    (0xA015, 0xA015, 31),
    (0xA016, 0xA48C, 23),
    (0xA490, 0xA4C6, 23),
    (0xA4D0, 0xA4FD, 2),
    (0xA4FE, 0xA4FF, 6),
    (0xA500, 0xA60C, 2),
    (0xA60D, 0xA60D, 6),
    (0xA60E, 0xA60E, 17),
    (0xA60F, 0xA60F, 6),
    (0xA610, 0xA61F, 2),
    (0xA620, 0xA629, 32),
    (0xA62A, 0xA62B, 2),
    (0xA640, 0xA66E, 2),
    (0xA66F, 0xA672, 12),
    (0xA673, 0xA673, 2),
    (0xA674, 0xA67D, 12),
    (0xA67E, 0xA69D, 2),
    (0xA69E, 0xA69F, 12),
    (0xA6A0, 0xA6EF, 2),
    (0xA6F0, 0xA6F1, 12),
    (0xA6F2, 0xA6F2, 2),
    (0xA6F3, 0xA6F7, 6),
    (0xA700, 0xA7CA, 2),
    (0xA7D0, 0xA7D1, 2),
    (0xA7D3, 0xA7D3, 2),
    (0xA7D5, 0xA7D9, 2),
    (0xA7F2, 0xA801, 2),
    (0xA802, 0xA802, 12),
    (0xA803, 0xA805, 2),
    (0xA806, 0xA806, 12),
    (0xA807, 0xA80A, 2),
    (0xA80B, 0xA80B, 12),
    (0xA80C, 0xA822, 2),
    (0xA823, 0xA827, 12),
    (0xA828, 0xA82B, 2),
    (0xA82C, 0xA82C, 12),
    (0xA830, 0xA837, 2),
    (0xA838, 0xA838, 34),
    (0xA839, 0xA839, 2),
    (0xA840, 0xA873, 2),
    (0xA874, 0xA875, 7),
    (0xA876, 0xA877, 17),
    (0xA880, 0xA881, 12),
    (0xA882, 0xA8B3, 2),
    (0xA8B4, 0xA8C5, 12),
    (0xA8CE, 0xA8CF, 6),
    (0xA8D0, 0xA8D9, 32),
    (0xA8E0, 0xA8F1, 12),
    (0xA8F2, 0xA8FB, 2),
    (0xA8FC, 0xA8FC, 7),
    (0xA8FD, 0xA8FE, 2),
    (0xA8FF, 0xA8FF, 12),
    (0xA900, 0xA909, 32),
    (0xA90A, 0xA925, 2),
    (0xA926, 0xA92D, 12),
    (0xA92E, 0xA92F, 6),
    (0xA930, 0xA946, 2),
    (0xA947, 0xA953, 12),
    (0xA95F, 0xA95F, 2),
    (0xA960, 0xA97C, 26),
    (0xA980, 0xA983, 12),
    (0xA984, 0xA9B2, 1),
    (0xA9B3, 0xA9BF, 12),
    (0xA9C0, 0xA9C0, 43),
    (0xA9C1, 0xA9C6, 23),
    (0xA9C7, 0xA9C9, 6),
    (0xA9CA, 0xA9CD, 23),
    (0xA9CF, 0xA9CF, 6),
    (0xA9D0, 0xA9D9, 23),
    (0xA9DE, 0xA9DF, 23),
    (0xA9E0, 0xA9EF, 38),
    (0xA9F0, 0xA9F9, 32),
    (0xA9FA, 0xA9FE, 38),
    (0xAA00, 0xAA28, 4),
    (0xAA29, 0xAA36, 12),
    (0xAA40, 0xAA42, 6),
    (0xAA43, 0xAA43, 12),
    (0xAA44, 0xAA4B, 6),
    (0xAA4C, 0xAA4D, 12),
    (0xAA50, 0xAA59, 23),
    (0xAA5C, 0xAA5C, 23),
    (0xAA5D, 0xAA5F, 6),
    (0xAA60, 0xAAC2, 38),
    (0xAADB, 0xAADF, 38),
    (0xAAE0, 0xAAEA, 2),
    (0xAAEB, 0xAAEF, 12),
    (0xAAF0, 0xAAF1, 6),
    (0xAAF2, 0xAAF4, 2),
    (0xAAF5, 0xAAF6, 12),
    (0xAB01, 0xAB06, 2),
    (0xAB09, 0xAB0E, 2),
    (0xAB11, 0xAB16, 2),
    (0xAB20, 0xAB26, 2),
    (0xAB28, 0xAB2E, 2),
    (0xAB30, 0xAB6B, 2),
    (0xAB70, 0xABE2, 2),
    (0xABE3, 0xABEA, 12),
    (0xABEB, 0xABEB, 6),
    (0xABEC, 0xABED, 12),
    (0xABF0, 0xABF9, 32),
    (0xAC00, 0xAC00, 19),
    (0xAC01, 0xAC1B, 20),
    (0xAC1C, 0xAC1C, 19),
    (0xAC1D, 0xAC37, 20),
    (0xAC38, 0xAC38, 19),
    (0xAC39, 0xAC53, 20),
    (0xAC54, 0xAC54, 19),
    (0xAC55, 0xAC6F, 20),
    (0xAC70, 0xAC70, 19),
    (0xAC71, 0xAC8B, 20),
    (0xAC8C, 0xAC8C, 19),
    (0xAC8D, 0xACA7, 20),
    (0xACA8, 0xACA8, 19),
    (0xACA9, 0xACC3, 20),
    (0xACC4, 0xACC4, 19),
    (0xACC5, 0xACDF, 20),
    (0xACE0, 0xACE0, 19),
    (0xACE1, 0xACFB, 20),
    (0xACFC, 0xACFC, 19),
    (0xACFD, 0xAD17, 20),
    (0xAD18, 0xAD18, 19),
    (0xAD19, 0xAD33, 20),
    (0xAD34, 0xAD34, 19),
    (0xAD35, 0xAD4F, 20),
    (0xAD50, 0xAD50, 19),
    (0xAD51, 0xAD6B, 20),
    (0xAD6C, 0xAD6C, 19),
    (0xAD6D, 0xAD87, 20),
    (0xAD88, 0xAD88, 19),
    (0xAD89, 0xADA3, 20),
    (0xADA4, 0xADA4, 19),
    (0xADA5, 0xADBF, 20),
    (0xADC0, 0xADC0, 19),
    (0xADC1, 0xADDB, 20),
    (0xADDC, 0xADDC, 19),
    (0xADDD, 0xADF7, 20),
    (0xADF8, 0xADF8, 19),
    (0xADF9, 0xAE13, 20),
    (0xAE14, 0xAE14, 19),
    (0xAE15, 0xAE2F, 20),
    (0xAE30, 0xAE30, 19),
    (0xAE31, 0xAE4B, 20),
    (0xAE4C, 0xAE4C, 19),
    (0xAE4D, 0xAE67, 20),
    (0xAE68, 0xAE68, 19),
    (0xAE69, 0xAE83, 20),
    (0xAE84, 0xAE84, 19),
    (0xAE85, 0xAE9F, 20),
    (0xAEA0, 0xAEA0, 19),
    (0xAEA1, 0xAEBB, 20),
    (0xAEBC, 0xAEBC, 19),
    (0xAEBD, 0xAED7, 20),
    (0xAED8, 0xAED8, 19),
    (0xAED9, 0xAEF3, 20),
    (0xAEF4, 0xAEF4, 19),
    (0xAEF5, 0xAF0F, 20),
    (0xAF10, 0xAF10, 19),
    (0xAF11, 0xAF2B, 20),
    (0xAF2C, 0xAF2C, 19),
    (0xAF2D, 0xAF47, 20),
    (0xAF48, 0xAF48, 19),
    (0xAF49, 0xAF63, 20),
    (0xAF64, 0xAF64, 19),
    (0xAF65, 0xAF7F, 20),
    (0xAF80, 0xAF80, 19),
    (0xAF81, 0xAF9B, 20),
    (0xAF9C, 0xAF9C, 19),
    (0xAF9D, 0xAFB7, 20),
    (0xAFB8, 0xAFB8, 19),
    (0xAFB9, 0xAFD3, 20),
    (0xAFD4, 0xAFD4, 19),
    (0xAFD5, 0xAFEF, 20),
    (0xAFF0, 0xAFF0, 19),
    (0xAFF1, 0xB00B, 20),
    (0xB00C, 0xB00C, 19),
    (0xB00D, 0xB027, 20),
    (0xB028, 0xB028, 19),
    (0xB029, 0xB043, 20),
    (0xB044, 0xB044, 19),
    (0xB045, 0xB05F, 20),
    (0xB060, 0xB060, 19),
    (0xB061, 0xB07B, 20),
    (0xB07C, 0xB07C, 19),
    (0xB07D, 0xB097, 20),
    (0xB098, 0xB098, 19),
    (0xB099, 0xB0B3, 20),
    (0xB0B4, 0xB0B4, 19),
    (0xB0B5, 0xB0CF, 20),
    (0xB0D0, 0xB0D0, 19),
    (0xB0D1, 0xB0EB, 20),
    (0xB0EC, 0xB0EC, 19),
    (0xB0ED, 0xB107, 20),
    (0xB108, 0xB108, 19),
    (0xB109, 0xB123, 20),
    (0xB124, 0xB124, 19),
    (0xB125, 0xB13F, 20),
    (0xB140, 0xB140, 19),
    (0xB141, 0xB15B, 20),
    (0xB15C, 0xB15C, 19),
    (0xB15D, 0xB177, 20),
    (0xB178, 0xB178, 19),
    (0xB179, 0xB193, 20),
    (0xB194, 0xB194, 19),
    (0xB195, 0xB1AF, 20),
    (0xB1B0, 0xB1B0, 19),
    (0xB1B1, 0xB1CB, 20),
    (0xB1CC, 0xB1CC, 19),
    (0xB1CD, 0xB1E7, 20),
    (0xB1E8, 0xB1E8, 19),
    (0xB1E9, 0xB203, 20),
    (0xB204, 0xB204, 19),
    (0xB205, 0xB21F, 20),
    (0xB220, 0xB220, 19),
    (0xB221, 0xB23B, 20),
    (0xB23C, 0xB23C, 19),
    (0xB23D, 0xB257, 20),
    (0xB258, 0xB258, 19),
    (0xB259, 0xB273, 20),
    (0xB274, 0xB274, 19),
    (0xB275, 0xB28F, 20),
    (0xB290, 0xB290, 19),
    (0xB291, 0xB2AB, 20),
    (0xB2AC, 0xB2AC, 19),
    (0xB2AD, 0xB2C7, 20),
    (0xB2C8, 0xB2C8, 19),
    (0xB2C9, 0xB2E3, 20),
    (0xB2E4, 0xB2E4, 19),
    (0xB2E5, 0xB2FF, 20),
    (0xB300, 0xB300, 19),
    (0xB301, 0xB31B, 20),
    (0xB31C, 0xB31C, 19),
    (0xB31D, 0xB337, 20),
    (0xB338, 0xB338, 19),
    (0xB339, 0xB353, 20),
    (0xB354, 0xB354, 19),
    (0xB355, 0xB36F, 20),
    (0xB370, 0xB370, 19),
    (0xB371, 0xB38B, 20),
    (0xB38C, 0xB38C, 19),
    (0xB38D, 0xB3A7, 20),
    (0xB3A8, 0xB3A8, 19),
    (0xB3A9, 0xB3C3, 20),
    (0xB3C4, 0xB3C4, 19),
    (0xB3C5, 0xB3DF, 20),
    (0xB3E0, 0xB3E0, 19),
    (0xB3E1, 0xB3FB, 20),
    (0xB3FC, 0xB3FC, 19),
    (0xB3FD, 0xB417, 20),
    (0xB418, 0xB418, 19),
    (0xB419, 0xB433, 20),
    (0xB434, 0xB434, 19),
    (0xB435, 0xB44F, 20),
    (0xB450, 0xB450, 19),
    (0xB451, 0xB46B, 20),
    (0xB46C, 0xB46C, 19),
    (0xB46D, 0xB487, 20),
    (0xB488, 0xB488, 19),
    (0xB489, 0xB4A3, 20),
    (0xB4A4, 0xB4A4, 19),
    (0xB4A5, 0xB4BF, 20),
    (0xB4C0, 0xB4C0, 19),
    (0xB4C1, 0xB4DB, 20),
    (0xB4DC, 0xB4DC, 19),
    (0xB4DD, 0xB4F7, 20),
    (0xB4F8, 0xB4F8, 19),
    (0xB4F9, 0xB513, 20),
    (0xB514, 0xB514, 19),
    (0xB515, 0xB52F, 20),
    (0xB530, 0xB530, 19),
    (0xB531, 0xB54B, 20),
    (0xB54C, 0xB54C, 19),
    (0xB54D, 0xB567, 20),
    (0xB568, 0xB568, 19),
    (0xB569, 0xB583, 20),
    (0xB584, 0xB584, 19),
    (0xB585, 0xB59F, 20),
    (0xB5A0, 0xB5A0, 19),
    (0xB5A1, 0xB5BB, 20),
    (0xB5BC, 0xB5BC, 19),
    (0xB5BD, 0xB5D7, 20),
    (0xB5D8, 0xB5D8, 19),
    (0xB5D9, 0xB5F3, 20),
    (0xB5F4, 0xB5F4, 19),
    (0xB5F5, 0xB60F, 20),
    (0xB610, 0xB610, 19),
    (0xB611, 0xB62B, 20),
    (0xB62C, 0xB62C, 19),
    (0xB62D, 0xB647, 20),
    (0xB648, 0xB648, 19),
    (0xB649, 0xB663, 20),
    (0xB664, 0xB664, 19),
    (0xB665, 0xB67F, 20),
    (0xB680, 0xB680, 19),
    (0xB681, 0xB69B, 20),
    (0xB69C, 0xB69C, 19),
    (0xB69D, 0xB6B7, 20),
    (0xB6B8, 0xB6B8, 19),
    (0xB6B9, 0xB6D3, 20),
    (0xB6D4, 0xB6D4, 19),
    (0xB6D5, 0xB6EF, 20),
    (0xB6F0, 0xB6F0, 19),
    (0xB6F1, 0xB70B, 20),
    (0xB70C, 0xB70C, 19),
    (0xB70D, 0xB727, 20),
    (0xB728, 0xB728, 19),
    (0xB729, 0xB743, 20),
    (0xB744, 0xB744, 19),
    (0xB745, 0xB75F, 20),
    (0xB760, 0xB760, 19),
    (0xB761, 0xB77B, 20),
    (0xB77C, 0xB77C, 19),
    (0xB77D, 0xB797, 20),
    (0xB798, 0xB798, 19),
    (0xB799, 0xB7B3, 20),
    (0xB7B4, 0xB7B4, 19),
    (0xB7B5, 0xB7CF, 20),
    (0xB7D0, 0xB7D0, 19),
    (0xB7D1, 0xB7EB, 20),
    (0xB7EC, 0xB7EC, 19),
    (0xB7ED, 0xB807, 20),
    (0xB808, 0xB808, 19),
    (0xB809, 0xB823, 20),
    (0xB824, 0xB824, 19),
    (0xB825, 0xB83F, 20),
    (0xB840, 0xB840, 19),
    (0xB841, 0xB85B, 20),
    (0xB85C, 0xB85C, 19),
    (0xB85D, 0xB877, 20),
    (0xB878, 0xB878, 19),
    (0xB879, 0xB893, 20),
    (0xB894, 0xB894, 19),
    (0xB895, 0xB8AF, 20),
    (0xB8B0, 0xB8B0, 19),
    (0xB8B1, 0xB8CB, 20),
    (0xB8CC, 0xB8CC, 19),
    (0xB8CD, 0xB8E7, 20),
    (0xB8E8, 0xB8E8, 19),
    (0xB8E9, 0xB903, 20),
    (0xB904, 0xB904, 19),
    (0xB905, 0xB91F, 20),
    (0xB920, 0xB920, 19),
    (0xB921, 0xB93B, 20),
    (0xB93C, 0xB93C, 19),
    (0xB93D, 0xB957, 20),
    (0xB958, 0xB958, 19),
    (0xB959, 0xB973, 20),
    (0xB974, 0xB974, 19),
    (0xB975, 0xB98F, 20),
    (0xB990, 0xB990, 19),
    (0xB991, 0xB9AB, 20),
    (0xB9AC, 0xB9AC, 19),
    (0xB9AD, 0xB9C7, 20),
    (0xB9C8, 0xB9C8, 19),
    (0xB9C9, 0xB9E3, 20),
    (0xB9E4, 0xB9E4, 19),
    (0xB9E5, 0xB9FF, 20),
    (0xBA00, 0xBA00, 19),
    (0xBA01, 0xBA1B, 20),
    (0xBA1C, 0xBA1C, 19),
    (0xBA1D, 0xBA37, 20),
    (0xBA38, 0xBA38, 19),
    (0xBA39, 0xBA53, 20),
    (0xBA54, 0xBA54, 19),
    (0xBA55, 0xBA6F, 20),
    (0xBA70, 0xBA70, 19),
    (0xBA71, 0xBA8B, 20),
    (0xBA8C, 0xBA8C, 19),
    (0xBA8D, 0xBAA7, 20),
    (0xBAA8, 0xBAA8, 19),
    (0xBAA9, 0xBAC3, 20),
    (0xBAC4, 0xBAC4, 19),
    (0xBAC5, 0xBADF, 20),
    (0xBAE0, 0xBAE0, 19),
    (0xBAE1, 0xBAFB, 20),
    (0xBAFC, 0xBAFC, 19),
    (0xBAFD, 0xBB17, 20),
    (0xBB18, 0xBB18, 19),
    (0xBB19, 0xBB33, 20),
    (0xBB34, 0xBB34, 19),
    (0xBB35, 0xBB4F, 20),
    (0xBB50, 0xBB50, 19),
    (0xBB51, 0xBB6B, 20),
    (0xBB6C, 0xBB6C, 19),
    (0xBB6D, 0xBB87, 20),
    (0xBB88, 0xBB88, 19),
    (0xBB89, 0xBBA3, 20),
    (0xBBA4, 0xBBA4, 19),
    (0xBBA5, 0xBBBF, 20),
    (0xBBC0, 0xBBC0, 19),
    (0xBBC1, 0xBBDB, 20),
    (0xBBDC, 0xBBDC, 19),
    (0xBBDD, 0xBBF7, 20),
    (0xBBF8, 0xBBF8, 19),
    (0xBBF9, 0xBC13, 20),
    (0xBC14, 0xBC14, 19),
    (0xBC15, 0xBC2F, 20),
    (0xBC30, 0xBC30, 19),
    (0xBC31, 0xBC4B, 20),
    (0xBC4C, 0xBC4C, 19),
    (0xBC4D, 0xBC67, 20),
    (0xBC68, 0xBC68, 19),
    (0xBC69, 0xBC83, 20),
    (0xBC84, 0xBC84, 19),
    (0xBC85, 0xBC9F, 20),
    (0xBCA0, 0xBCA0, 19),
    (0xBCA1, 0xBCBB, 20),
    (0xBCBC, 0xBCBC, 19),
    (0xBCBD, 0xBCD7, 20),
    (0xBCD8, 0xBCD8, 19),
    (0xBCD9, 0xBCF3, 20),
    (0xBCF4, 0xBCF4, 19),
    (0xBCF5, 0xBD0F, 20),
    (0xBD10, 0xBD10, 19),
    (0xBD11, 0xBD2B, 20),
    (0xBD2C, 0xBD2C, 19),
    (0xBD2D, 0xBD47, 20),
    (0xBD48, 0xBD48, 19),
    (0xBD49, 0xBD63, 20),
    (0xBD64, 0xBD64, 19),
    (0xBD65, 0xBD7F, 20),
    (0xBD80, 0xBD80, 19),
    (0xBD81, 0xBD9B, 20),
    (0xBD9C, 0xBD9C, 19),
    (0xBD9D, 0xBDB7, 20),
    (0xBDB8, 0xBDB8, 19),
    (0xBDB9, 0xBDD3, 20),
    (0xBDD4, 0xBDD4, 19),
    (0xBDD5, 0xBDEF, 20),
    (0xBDF0, 0xBDF0, 19),
    (0xBDF1, 0xBE0B, 20),
    (0xBE0C, 0xBE0C, 19),
    (0xBE0D, 0xBE27, 20),
    (0xBE28, 0xBE28, 19),
    (0xBE29, 0xBE43, 20),
    (0xBE44, 0xBE44, 19),
    (0xBE45, 0xBE5F, 20),
    (0xBE60, 0xBE60, 19),
    (0xBE61, 0xBE7B, 20),
    (0xBE7C, 0xBE7C, 19),
    (0xBE7D, 0xBE97, 20),
    (0xBE98, 0xBE98, 19),
    (0xBE99, 0xBEB3, 20),
    (0xBEB4, 0xBEB4, 19),
    (0xBEB5, 0xBECF, 20),
    (0xBED0, 0xBED0, 19),
    (0xBED1, 0xBEEB, 20),
    (0xBEEC, 0xBEEC, 19),
    (0xBEED, 0xBF07, 20),
    (0xBF08, 0xBF08, 19),
    (0xBF09, 0xBF23, 20),
    (0xBF24, 0xBF24, 19),
    (0xBF25, 0xBF3F, 20),
    (0xBF40, 0xBF40, 19),
    (0xBF41, 0xBF5B, 20),
    (0xBF5C, 0xBF5C, 19),
    (0xBF5D, 0xBF77, 20),
    (0xBF78, 0xBF78, 19),
    (0xBF79, 0xBF93, 20),
    (0xBF94, 0xBF94, 19),
    (0xBF95, 0xBFAF, 20),
    (0xBFB0, 0xBFB0, 19),
    (0xBFB1, 0xBFCB, 20),
    (0xBFCC, 0xBFCC, 19),
    (0xBFCD, 0xBFE7, 20),
    (0xBFE8, 0xBFE8, 19),
    (0xBFE9, 0xC003, 20),
    (0xC004, 0xC004, 19),
    (0xC005, 0xC01F, 20),
    (0xC020, 0xC020, 19),
    (0xC021, 0xC03B, 20),
    (0xC03C, 0xC03C, 19),
    (0xC03D, 0xC057, 20),
    (0xC058, 0xC058, 19),
    (0xC059, 0xC073, 20),
    (0xC074, 0xC074, 19),
    (0xC075, 0xC08F, 20),
    (0xC090, 0xC090, 19),
    (0xC091, 0xC0AB, 20),
    (0xC0AC, 0xC0AC, 19),
    (0xC0AD, 0xC0C7, 20),
    (0xC0C8, 0xC0C8, 19),
    (0xC0C9, 0xC0E3, 20),
    (0xC0E4, 0xC0E4, 19),
    (0xC0E5, 0xC0FF, 20),
    (0xC100, 0xC100, 19),
    (0xC101, 0xC11B, 20),
    (0xC11C, 0xC11C, 19),
    (0xC11D, 0xC137, 20),
    (0xC138, 0xC138, 19),
    (0xC139, 0xC153, 20),
    (0xC154, 0xC154, 19),
    (0xC155, 0xC16F, 20),
    (0xC170, 0xC170, 19),
    (0xC171, 0xC18B, 20),
    (0xC18C, 0xC18C, 19),
    (0xC18D, 0xC1A7, 20),
    (0xC1A8, 0xC1A8, 19),
    (0xC1A9, 0xC1C3, 20),
    (0xC1C4, 0xC1C4, 19),
    (0xC1C5, 0xC1DF, 20),
    (0xC1E0, 0xC1E0, 19),
    (0xC1E1, 0xC1FB, 20),
    (0xC1FC, 0xC1FC, 19),
    (0xC1FD, 0xC217, 20),
    (0xC218, 0xC218, 19),
    (0xC219, 0xC233, 20),
    (0xC234, 0xC234, 19),
    (0xC235, 0xC24F, 20),
    (0xC250, 0xC250, 19),
    (0xC251, 0xC26B, 20),
    (0xC26C, 0xC26C, 19),
    (0xC26D, 0xC287, 20),
    (0xC288, 0xC288, 19),
    (0xC289, 0xC2A3, 20),
    (0xC2A4, 0xC2A4, 19),
    (0xC2A5, 0xC2BF, 20),
    (0xC2C0, 0xC2C0, 19),
    (0xC2C1, 0xC2DB, 20),
    (0xC2DC, 0xC2DC, 19),
    (0xC2DD, 0xC2F7, 20),
    (0xC2F8, 0xC2F8, 19),
    (0xC2F9, 0xC313, 20),
    (0xC314, 0xC314, 19),
    (0xC315, 0xC32F, 20),
    (0xC330, 0xC330, 19),
    (0xC331, 0xC34B, 20),
    (0xC34C, 0xC34C, 19),
    (0xC34D, 0xC367, 20),
    (0xC368, 0xC368, 19),
    (0xC369, 0xC383, 20),
    (0xC384, 0xC384, 19),
    (0xC385, 0xC39F, 20),
    (0xC3A0, 0xC3A0, 19),
    (0xC3A1, 0xC3BB, 20),
    (0xC3BC, 0xC3BC, 19),
    (0xC3BD, 0xC3D7, 20),
    (0xC3D8, 0xC3D8, 19),
    (0xC3D9, 0xC3F3, 20),
    (0xC3F4, 0xC3F4, 19),
    (0xC3F5, 0xC40F, 20),
    (0xC410, 0xC410, 19),
    (0xC411, 0xC42B, 20),
    (0xC42C, 0xC42C, 19),
    (0xC42D, 0xC447, 20),
    (0xC448, 0xC448, 19),
    (0xC449, 0xC463, 20),
    (0xC464, 0xC464, 19),
    (0xC465, 0xC47F, 20),
    (0xC480, 0xC480, 19),
    (0xC481, 0xC49B, 20),
    (0xC49C, 0xC49C, 19),
    (0xC49D, 0xC4B7, 20),
    (0xC4B8, 0xC4B8, 19),
    (0xC4B9, 0xC4D3, 20),
    (0xC4D4, 0xC4D4, 19),
    (0xC4D5, 0xC4EF, 20),
    (0xC4F0, 0xC4F0, 19),
    (0xC4F1, 0xC50B, 20),
    (0xC50C, 0xC50C, 19),
    (0xC50D, 0xC527, 20),
    (0xC528, 0xC528, 19),
    (0xC529, 0xC543, 20),
    (0xC544, 0xC544, 19),
    (0xC545, 0xC55F, 20),
    (0xC560, 0xC560, 19),
    (0xC561, 0xC57B, 20),
    (0xC57C, 0xC57C, 19),
    (0xC57D, 0xC597, 20),
    (0xC598, 0xC598, 19),
    (0xC599, 0xC5B3, 20),
    (0xC5B4, 0xC5B4, 19),
    (0xC5B5, 0xC5CF, 20),
    (0xC5D0, 0xC5D0, 19),
    (0xC5D1, 0xC5EB, 20),
    (0xC5EC, 0xC5EC, 19),
    (0xC5ED, 0xC607, 20),
    (0xC608, 0xC608, 19),
    (0xC609, 0xC623, 20),
    (0xC624, 0xC624, 19),
    (0xC625, 0xC63F, 20),
    (0xC640, 0xC640, 19),
    (0xC641, 0xC65B, 20),
    (0xC65C, 0xC65C, 19),
    (0xC65D, 0xC677, 20),
    (0xC678, 0xC678, 19),
    (0xC679, 0xC693, 20),
    (0xC694, 0xC694, 19),
    (0xC695, 0xC6AF, 20),
    (0xC6B0, 0xC6B0, 19),
    (0xC6B1, 0xC6CB, 20),
    (0xC6CC, 0xC6CC, 19),
    (0xC6CD, 0xC6E7, 20),
    (0xC6E8, 0xC6E8, 19),
    (0xC6E9, 0xC703, 20),
    (0xC704, 0xC704, 19),
    (0xC705, 0xC71F, 20),
    (0xC720, 0xC720, 19),
    (0xC721, 0xC73B, 20),
    (0xC73C, 0xC73C, 19),
    (0xC73D, 0xC757, 20),
    (0xC758, 0xC758, 19),
    (0xC759, 0xC773, 20),
    (0xC774, 0xC774, 19),
    (0xC775, 0xC78F, 20),
    (0xC790, 0xC790, 19),
    (0xC791, 0xC7AB, 20),
    (0xC7AC, 0xC7AC, 19),
    (0xC7AD, 0xC7C7, 20),
    (0xC7C8, 0xC7C8, 19),
    (0xC7C9, 0xC7E3, 20),
    (0xC7E4, 0xC7E4, 19),
    (0xC7E5, 0xC7FF, 20),
    (0xC800, 0xC800, 19),
    (0xC801, 0xC81B, 20),
    (0xC81C, 0xC81C, 19),
    (0xC81D, 0xC837, 20),
    (0xC838, 0xC838, 19),
    (0xC839, 0xC853, 20),
    (0xC854, 0xC854, 19),
    (0xC855, 0xC86F, 20),
    (0xC870, 0xC870, 19),
    (0xC871, 0xC88B, 20),
    (0xC88C, 0xC88C, 19),
    (0xC88D, 0xC8A7, 20),
    (0xC8A8, 0xC8A8, 19),
    (0xC8A9, 0xC8C3, 20),
    (0xC8C4, 0xC8C4, 19),
    (0xC8C5, 0xC8DF, 20),
    (0xC8E0, 0xC8E0, 19),
    (0xC8E1, 0xC8FB, 20),
    (0xC8FC, 0xC8FC, 19),
    (0xC8FD, 0xC917, 20),
    (0xC918, 0xC918, 19),
    (0xC919, 0xC933, 20),
    (0xC934, 0xC934, 19),
    (0xC935, 0xC94F, 20),
    (0xC950, 0xC950, 19),
    (0xC951, 0xC96B, 20),
    (0xC96C, 0xC96C, 19),
    (0xC96D, 0xC987, 20),
    (0xC988, 0xC988, 19),
    (0xC989, 0xC9A3, 20),
    (0xC9A4, 0xC9A4, 19),
    (0xC9A5, 0xC9BF, 20),
    (0xC9C0, 0xC9C0, 19),
    (0xC9C1, 0xC9DB, 20),
    (0xC9DC, 0xC9DC, 19),
    (0xC9DD, 0xC9F7, 20),
    (0xC9F8, 0xC9F8, 19),
    (0xC9F9, 0xCA13, 20),
    (0xCA14, 0xCA14, 19),
    (0xCA15, 0xCA2F, 20),
    (0xCA30, 0xCA30, 19),
    (0xCA31, 0xCA4B, 20),
    (0xCA4C, 0xCA4C, 19),
    (0xCA4D, 0xCA67, 20),
    (0xCA68, 0xCA68, 19),
    (0xCA69, 0xCA83, 20),
    (0xCA84, 0xCA84, 19),
    (0xCA85, 0xCA9F, 20),
    (0xCAA0, 0xCAA0, 19),
    (0xCAA1, 0xCABB, 20),
    (0xCABC, 0xCABC, 19),
    (0xCABD, 0xCAD7, 20),
    (0xCAD8, 0xCAD8, 19),
    (0xCAD9, 0xCAF3, 20),
    (0xCAF4, 0xCAF4, 19),
    (0xCAF5, 0xCB0F, 20),
    (0xCB10, 0xCB10, 19),
    (0xCB11, 0xCB2B, 20),
    (0xCB2C, 0xCB2C, 19),
    (0xCB2D, 0xCB47, 20),
    (0xCB48, 0xCB48, 19),
    (0xCB49, 0xCB63, 20),
    (0xCB64, 0xCB64, 19),
    (0xCB65, 0xCB7F, 20),
    (0xCB80, 0xCB80, 19),
    (0xCB81, 0xCB9B, 20),
    (0xCB9C, 0xCB9C, 19),
    (0xCB9D, 0xCBB7, 20),
    (0xCBB8, 0xCBB8, 19),
    (0xCBB9, 0xCBD3, 20),
    (0xCBD4, 0xCBD4, 19),
    (0xCBD5, 0xCBEF, 20),
    (0xCBF0, 0xCBF0, 19),
    (0xCBF1, 0xCC0B, 20),
    (0xCC0C, 0xCC0C, 19),
    (0xCC0D, 0xCC27, 20),
    (0xCC28, 0xCC28, 19),
    (0xCC29, 0xCC43, 20),
    (0xCC44, 0xCC44, 19),
    (0xCC45, 0xCC5F, 20),
    (0xCC60, 0xCC60, 19),
    (0xCC61, 0xCC7B, 20),
    (0xCC7C, 0xCC7C, 19),
    (0xCC7D, 0xCC97, 20),
    (0xCC98, 0xCC98, 19),
    (0xCC99, 0xCCB3, 20),
    (0xCCB4, 0xCCB4, 19),
    (0xCCB5, 0xCCCF, 20),
    (0xCCD0, 0xCCD0, 19),
    (0xCCD1, 0xCCEB, 20),
    (0xCCEC, 0xCCEC, 19),
    (0xCCED, 0xCD07, 20),
    (0xCD08, 0xCD08, 19),
    (0xCD09, 0xCD23, 20),
    (0xCD24, 0xCD24, 19),
    (0xCD25, 0xCD3F, 20),
    (0xCD40, 0xCD40, 19),
    (0xCD41, 0xCD5B, 20),
    (0xCD5C, 0xCD5C, 19),
    (0xCD5D, 0xCD77, 20),
    (0xCD78, 0xCD78, 19),
    (0xCD79, 0xCD93, 20),
    (0xCD94, 0xCD94, 19),
    (0xCD95, 0xCDAF, 20),
    (0xCDB0, 0xCDB0, 19),
    (0xCDB1, 0xCDCB, 20),
    (0xCDCC, 0xCDCC, 19),
    (0xCDCD, 0xCDE7, 20),
    (0xCDE8, 0xCDE8, 19),
    (0xCDE9, 0xCE03, 20),
    (0xCE04, 0xCE04, 19),
    (0xCE05, 0xCE1F, 20),
    (0xCE20, 0xCE20, 19),
    (0xCE21, 0xCE3B, 20),
    (0xCE3C, 0xCE3C, 19),
    (0xCE3D, 0xCE57, 20),
    (0xCE58, 0xCE58, 19),
    (0xCE59, 0xCE73, 20),
    (0xCE74, 0xCE74, 19),
    (0xCE75, 0xCE8F, 20),
    (0xCE90, 0xCE90, 19),
    (0xCE91, 0xCEAB, 20),
    (0xCEAC, 0xCEAC, 19),
    (0xCEAD, 0xCEC7, 20),
    (0xCEC8, 0xCEC8, 19),
    (0xCEC9, 0xCEE3, 20),
    (0xCEE4, 0xCEE4, 19),
    (0xCEE5, 0xCEFF, 20),
    (0xCF00, 0xCF00, 19),
    (0xCF01, 0xCF1B, 20),
    (0xCF1C, 0xCF1C, 19),
    (0xCF1D, 0xCF37, 20),
    (0xCF38, 0xCF38, 19),
    (0xCF39, 0xCF53, 20),
    (0xCF54, 0xCF54, 19),
    (0xCF55, 0xCF6F, 20),
    (0xCF70, 0xCF70, 19),
    (0xCF71, 0xCF8B, 20),
    (0xCF8C, 0xCF8C, 19),
    (0xCF8D, 0xCFA7, 20),
    (0xCFA8, 0xCFA8, 19),
    (0xCFA9, 0xCFC3, 20),
    (0xCFC4, 0xCFC4, 19),
    (0xCFC5, 0xCFDF, 20),
    (0xCFE0, 0xCFE0, 19),
    (0xCFE1, 0xCFFB, 20),
    (0xCFFC, 0xCFFC, 19),
    (0xCFFD, 0xD017, 20),
    (0xD018, 0xD018, 19),
    (0xD019, 0xD033, 20),
    (0xD034, 0xD034, 19),
    (0xD035, 0xD04F, 20),
    (0xD050, 0xD050, 19),
    (0xD051, 0xD06B, 20),
    (0xD06C, 0xD06C, 19),
    (0xD06D, 0xD087, 20),
    (0xD088, 0xD088, 19),
    (0xD089, 0xD0A3, 20),
    (0xD0A4, 0xD0A4, 19),
    (0xD0A5, 0xD0BF, 20),
    (0xD0C0, 0xD0C0, 19),
    (0xD0C1, 0xD0DB, 20),
    (0xD0DC, 0xD0DC, 19),
    (0xD0DD, 0xD0F7, 20),
    (0xD0F8, 0xD0F8, 19),
    (0xD0F9, 0xD113, 20),
    (0xD114, 0xD114, 19),
    (0xD115, 0xD12F, 20),
    (0xD130, 0xD130, 19),
    (0xD131, 0xD14B, 20),
    (0xD14C, 0xD14C, 19),
    (0xD14D, 0xD167, 20),
    (0xD168, 0xD168, 19),
    (0xD169, 0xD183, 20),
    (0xD184, 0xD184, 19),
    (0xD185, 0xD19F, 20),
    (0xD1A0, 0xD1A0, 19),
    (0xD1A1, 0xD1BB, 20),
    (0xD1BC, 0xD1BC, 19),
    (0xD1BD, 0xD1D7, 20),
    (0xD1D8, 0xD1D8, 19),
    (0xD1D9, 0xD1F3, 20),
    (0xD1F4, 0xD1F4, 19),
    (0xD1F5, 0xD20F, 20),
    (0xD210, 0xD210, 19),
    (0xD211, 0xD22B, 20),
    (0xD22C, 0xD22C, 19),
    (0xD22D, 0xD247, 20),
    (0xD248, 0xD248, 19),
    (0xD249, 0xD263, 20),
    (0xD264, 0xD264, 19),
    (0xD265, 0xD27F, 20),
    (0xD280, 0xD280, 19),
    (0xD281, 0xD29B, 20),
    (0xD29C, 0xD29C, 19),
    (0xD29D, 0xD2B7, 20),
    (0xD2B8, 0xD2B8, 19),
    (0xD2B9, 0xD2D3, 20),
    (0xD2D4, 0xD2D4, 19),
    (0xD2D5, 0xD2EF, 20),
    (0xD2F0, 0xD2F0, 19),
    (0xD2F1, 0xD30B, 20),
    (0xD30C, 0xD30C, 19),
    (0xD30D, 0xD327, 20),
    (0xD328, 0xD328, 19),
    (0xD329, 0xD343, 20),
    (0xD344, 0xD344, 19),
    (0xD345, 0xD35F, 20),
    (0xD360, 0xD360, 19),
    (0xD361, 0xD37B, 20),
    (0xD37C, 0xD37C, 19),
    (0xD37D, 0xD397, 20),
    (0xD398, 0xD398, 19),
    (0xD399, 0xD3B3, 20),
    (0xD3B4, 0xD3B4, 19),
    (0xD3B5, 0xD3CF, 20),
    (0xD3D0, 0xD3D0, 19),
    (0xD3D1, 0xD3EB, 20),
    (0xD3EC, 0xD3EC, 19),
    (0xD3ED, 0xD407, 20),
    (0xD408, 0xD408, 19),
    (0xD409, 0xD423, 20),
    (0xD424, 0xD424, 19),
    (0xD425, 0xD43F, 20),
    (0xD440, 0xD440, 19),
    (0xD441, 0xD45B, 20),
    (0xD45C, 0xD45C, 19),
    (0xD45D, 0xD477, 20),
    (0xD478, 0xD478, 19),
    (0xD479, 0xD493, 20),
    (0xD494, 0xD494, 19),
    (0xD495, 0xD4AF, 20),
    (0xD4B0, 0xD4B0, 19),
    (0xD4B1, 0xD4CB, 20),
    (0xD4CC, 0xD4CC, 19),
    (0xD4CD, 0xD4E7, 20),
    (0xD4E8, 0xD4E8, 19),
    (0xD4E9, 0xD503, 20),
    (0xD504, 0xD504, 19),
    (0xD505, 0xD51F, 20),
    (0xD520, 0xD520, 19),
    (0xD521, 0xD53B, 20),
    (0xD53C, 0xD53C, 19),
    (0xD53D, 0xD557, 20),
    (0xD558, 0xD558, 19),
    (0xD559, 0xD573, 20),
    (0xD574, 0xD574, 19),
    (0xD575, 0xD58F, 20),
    (0xD590, 0xD590, 19),
    (0xD591, 0xD5AB, 20),
    (0xD5AC, 0xD5AC, 19),
    (0xD5AD, 0xD5C7, 20),
    (0xD5C8, 0xD5C8, 19),
    (0xD5C9, 0xD5E3, 20),
    (0xD5E4, 0xD5E4, 19),
    (0xD5E5, 0xD5FF, 20),
    (0xD600, 0xD600, 19),
    (0xD601, 0xD61B, 20),
    (0xD61C, 0xD61C, 19),
    (0xD61D, 0xD637, 20),
    (0xD638, 0xD638, 19),
    (0xD639, 0xD653, 20),
    (0xD654, 0xD654, 19),
    (0xD655, 0xD66F, 20),
    (0xD670, 0xD670, 19),
    (0xD671, 0xD68B, 20),
    (0xD68C, 0xD68C, 19),
    (0xD68D, 0xD6A7, 20),
    (0xD6A8, 0xD6A8, 19),
    (0xD6A9, 0xD6C3, 20),
    (0xD6C4, 0xD6C4, 19),
    (0xD6C5, 0xD6DF, 20),
    (0xD6E0, 0xD6E0, 19),
    (0xD6E1, 0xD6FB, 20),
    (0xD6FC, 0xD6FC, 19),
    (0xD6FD, 0xD717, 20),
    (0xD718, 0xD718, 19),
    (0xD719, 0xD733, 20),
    (0xD734, 0xD734, 19),
    (0xD735, 0xD74F, 20),
    (0xD750, 0xD750, 19),
    (0xD751, 0xD76B, 20),
    (0xD76C, 0xD76C, 19),
    (0xD76D, 0xD787, 20),
    (0xD788, 0xD788, 19),
    (0xD789, 0xD7A3, 20),
    (0xD7B0, 0xD7C6, 28),
    (0xD7CB, 0xD7FB, 27),
    (0xD800, 0xDFFF, 39),
    (0xF900, 0xFAFF, 23),
    (0xFB00, 0xFB06, 2),
    (0xFB13, 0xFB17, 2),
    (0xFB1D, 0xFB1D, 21),
    (0xFB1E, 0xFB1E, 12),
    (0xFB1F, 0xFB28, 21),
    (0xFB29, 0xFB29, 2),
    (0xFB2A, 0xFB36, 21),
    (0xFB38, 0xFB3C, 21),
    (0xFB3E, 0xFB3E, 21),
    (0xFB40, 0xFB41, 21),
    (0xFB43, 0xFB44, 21),
    (0xFB46, 0xFB4F, 21),
    (0xFB50, 0xFBC2, 2),
    (0xFBD3, 0xFD3D, 2),
    (0xFD3E, 0xFD3E, 11),
    (0xFD3F, 0xFD3F, 33),
    (0xFD40, 0xFD8F, 2),
    (0xFD92, 0xFDC7, 2),
    (0xFDCF, 0xFDCF, 2),
    (0xFDF0, 0xFDFB, 2),
    (0xFDFC, 0xFDFC, 34),
    (0xFDFD, 0xFDFF, 2),
    (0xFE00, 0xFE0F, 12),
    (0xFE10, 0xFE10, 25),
    (0xFE11, 0xFE12, 11),
    (0xFE13, 0xFE14, 25),
    (0xFE15, 0xFE16, 17),
    (0xFE17, 0xFE17, 33),
    (0xFE18, 0xFE18, 11),
    (0xFE19, 0xFE19, 24),
    (0xFE20, 0xFE2F, 12),
    (0xFE30, 0xFE34, 23),
    (0xFE35, 0xFE35, 33),
    (0xFE36, 0xFE36, 11),
    (0xFE37, 0xFE37, 33),
    (0xFE38, 0xFE38, 11),
    (0xFE39, 0xFE39, 33),
    (0xFE3A, 0xFE3A, 11),
    (0xFE3B, 0xFE3B, 33),
    (0xFE3C, 0xFE3C, 11),
    (0xFE3D, 0xFE3D, 33),
    (0xFE3E, 0xFE3E, 11),
    (0xFE3F, 0xFE3F, 33),
    (0xFE40, 0xFE40, 11),
    (0xFE41, 0xFE41, 33),
    (0xFE42, 0xFE42, 11),
    (0xFE43, 0xFE43, 33),
    (0xFE44, 0xFE44, 11),
    (0xFE45, 0xFE46, 23),
    (0xFE47, 0xFE47, 33),
    (0xFE48, 0xFE48, 11),
    (0xFE49, 0xFE4F, 23),
    (0xFE50, 0xFE50, 11),
    (0xFE51, 0xFE51, 23),
    (0xFE52, 0xFE52, 11),
    (0xFE54, 0xFE55, 31),
    (0xFE56, 0xFE57, 17),
    (0xFE58, 0xFE58, 23),
    (0xFE59, 0xFE59, 33),
    (0xFE5A, 0xFE5A, 11),
    (0xFE5B, 0xFE5B, 33),
    (0xFE5C, 0xFE5C, 11),
    (0xFE5D, 0xFE5D, 33),
    (0xFE5E, 0xFE5E, 11),
    (0xFE5F, 0xFE66, 23),
    (0xFE68, 0xFE68, 23),
    (0xFE69, 0xFE69, 35),
    (0xFE6A, 0xFE6A, 34),
    (0xFE6B, 0xFE6B, 23),
    (0xFE70, 0xFE74, 2),
    (0xFE76, 0xFEFC, 2),
    (0xFEFF, 0xFEFF, 44),
    (0xFF01, 0xFF01, 17),
    (0xFF02, 0xFF03, 23),
    (0xFF04, 0xFF04, 35),
    (0xFF05, 0xFF05, 34),
    (0xFF06, 0xFF07, 23),
    (0xFF08, 0xFF08, 33),
    (0xFF09, 0xFF09, 11),
    (0xFF0A, 0xFF0B, 23),
    (0xFF0C, 0xFF0C, 11),
    (0xFF0D, 0xFF0D, 23),
    (0xFF0E, 0xFF0E, 11),
    (0xFF0F, 0xFF19, 23),
    (0xFF1A, 0xFF1B, 31),
    (0xFF1C, 0xFF1E, 23),
    (0xFF1F, 0xFF1F, 17),
    (0xFF20, 0xFF3A, 23),
    (0xFF3B, 0xFF3B, 33),
    (0xFF3C, 0xFF3C, 23),
    (0xFF3D, 0xFF3D, 11),
    (0xFF3E, 0xFF5A, 23),
    (0xFF5B, 0xFF5B, 33),
    (0xFF5C, 0xFF5C, 23),
    (0xFF5D, 0xFF5D, 11),
    (0xFF5E, 0xFF5E, 23),
    (0xFF5F, 0xFF5F, 33),
    (0xFF60, 0xFF61, 11),
    (0xFF62, 0xFF62, 33),
    (0xFF63, 0xFF64, 11),
    (0xFF65, 0xFF65, 31),
    (0xFF66, 0xFF66, 23),
    (0xFF67, 0xFF70, 10),
    (0xFF71, 0xFF9D, 23),
    (0xFF9E, 0xFF9F, 31),
    (0xFFA0, 0xFFBE, 23),
    (0xFFC2, 0xFFC7, 23),
    (0xFFCA, 0xFFCF, 23),
    (0xFFD2, 0xFFD7, 23),
    (0xFFDA, 0xFFDC, 23),
    (0xFFE0, 0xFFE0, 34),
    (0xFFE1, 0xFFE1, 35),
    (0xFFE2, 0xFFE4, 23),
    (0xFFE5, 0xFFE6, 35),
    (0xFFE8, 0xFFEE, 2),
    (0xFFF9, 0xFFFB, 12),
    (0xFFFC, 0xFFFC, 9),
    (0xFFFD, 0xFFFD, 0),
    (0x10000, 0x1000B, 2),
    (0x1000D, 0x10026, 2),
    (0x10028, 0x1003A, 2),
    (0x1003C, 0x1003D, 2),
    (0x1003F, 0x1004D, 2),
    (0x10050, 0x1005D, 2),
    (0x10080, 0x100FA, 2),
    (0x10100, 0x10102, 6),
    (0x10107, 0x10133, 2),
    (0x10137, 0x1018E, 2),
    (0x10190, 0x1019C, 2),
    (0x101A0, 0x101A0, 2),
    (0x101D0, 0x101FC, 2),
    (0x101FD, 0x101FD, 12),
    (0x10280, 0x1029C, 2),
    (0x102A0, 0x102D0, 2),
    (0x102E0, 0x102E0, 12),
    (0x102E1, 0x102FB, 2),
    (0x10300, 0x10323, 2),
    (0x1032D, 0x1034A, 2),
    (0x10350, 0x10375, 2),
    (0x10376, 0x1037A, 12),
    (0x10380, 0x1039D, 2),
    (0x1039F, 0x1039F, 6),
    (0x103A0, 0x103C3, 2),
    (0x103C8, 0x103CF, 2),
    (0x103D0, 0x103D0, 6),
    (0x103D1, 0x103D5, 2),
    (0x10400, 0x1049D, 2),
    (0x104A0, 0x104A9, 32),
    (0x104B0, 0x104D3, 2),
    (0x104D8, 0x104FB, 2),
    (0x10500, 0x10527, 2),
    (0x10530, 0x10563, 2),
    (0x1056F, 0x1057A, 2),
    (0x1057C, 0x1058A, 2),
    (0x1058C, 0x10592, 2),
    (0x10594, 0x10595, 2),
    (0x10597, 0x105A1, 2),
    (0x105A3, 0x105B1, 2),
    (0x105B3, 0x105B9, 2),
    (0x105BB, 0x105BC, 2),
    (0x10600, 0x10736, 2),
    (0x10740, 0x10755, 2),
    (0x10760, 0x10767, 2),
    (0x10780, 0x10785, 2),
    (0x10787, 0x107B0, 2),
    (0x107B2, 0x107BA, 2),
    (0x10800, 0x10805, 2),
    (0x10808, 0x10808, 2),
    (0x1080A, 0x10835, 2),
    (0x10837, 0x10838, 2),
    (0x1083C, 0x1083C, 2),
    (0x1083F, 0x10855, 2),
    (0x10857, 0x10857, 6),
    (0x10858, 0x1089E, 2),
    (0x108A7, 0x108AF, 2),
    (0x108E0, 0x108F2, 2),
    (0x108F4, 0x108F5, 2),
    (0x108FB, 0x1091B, 2),
    (0x1091F, 0x1091F, 6),
    (0x10920, 0x10939, 2),
    (0x1093F, 0x1093F, 2),
    (0x10980, 0x109B7, 2),
    (0x109BC, 0x109CF, 2),
    (0x109D2, 0x10A00, 2),
    (0x10A01, 0x10A03, 12),
    (0x10A05, 0x10A06, 12),
    (0x10A0C, 0x10A0F, 12),
    (0x10A10, 0x10A13, 2),
    (0x10A15, 0x10A17, 2),
    (0x10A19, 0x10A35, 2),
    (0x10A38, 0x10A3A, 12),
    (0x10A3F, 0x10A3F, 12),
    (0x10A40, 0x10A48, 2),
    (0x10A50, 0x10A57, 6),
    (0x10A58, 0x10A58, 2),
    (0x10A60, 0x10A9F, 2),
    (0x10AC0, 0x10AE4, 2),
    (0x10AE5, 0x10AE6, 12),
    (0x10AEB, 0x10AEF, 2),
    (0x10AF0, 0x10AF5, 6),
    (0x10AF6, 0x10AF6, 24),
    (0x10B00, 0x10B35, 2),
    (0x10B39, 0x10B3F, 6),
    (0x10B40, 0x10B55, 2),
    (0x10B58, 0x10B72, 2),
    (0x10B78, 0x10B91, 2),
    (0x10B99, 0x10B9C, 2),
    (0x10BA9, 0x10BAF, 2),
    (0x10C00, 0x10C48, 2),
    (0x10C80, 0x10CB2, 2),
    (0x10CC0, 0x10CF2, 2),
    (0x10CFA, 0x10D23, 2),
    (0x10D24, 0x10D27, 12),
    (0x10D30, 0x10D39, 32),
    (0x10E60, 0x10E7E, 2),
    (0x10E80, 0x10EA9, 2),
    (0x10EAB, 0x10EAC, 12),
    (0x10EAD, 0x10EAD, 6),
    (0x10EB0, 0x10EB1, 2),
    (0x10EFD, 0x10EFF, 12),
    (0x10F00, 0x10F27, 2),
    (0x10F30, 0x10F45, 2),
    (0x10F46, 0x10F50, 12),
    (0x10F51, 0x10F59, 2),
    (0x10F70, 0x10F81, 2),
    (0x10F82, 0x10F85, 12),
    (0x10F86, 0x10F89, 2),
    (0x10FB0, 0x10FCB, 2),
    (0x10FE0, 0x10FF6, 2),
    (0x11000, 0x11002, 12),
    (0x11003, 0x11004, 3),
    (0x11005, 0x11037, 1),
    (0x11038, 0x11045, 12),
    (0x11046, 0x11046, 43),
    (0x11047, 0x11048, 6),
    (0x11049, 0x1104D, 23),
    (0x11052, 0x11065, 23),
    (0x11066, 0x1106F, 4),
    (0x11070, 0x11070, 12),
    (0x11071, 0x11072, 1),
    (0x11073, 0x11074, 12),
    (0x11075, 0x11075, 1),
    (0x1107F, 0x1107F, 18),
    (0x11080, 0x11082, 12),
    (0x11083, 0x110AF, 2),
    (0x110B0, 0x110BA, 12),
    (0x110BB, 0x110BC, 2),
    (0x110BD, 0x110BD, 32),
    (0x110BE, 0x110C1, 6),
    (0x110C2, 0x110C2, 12),
    (0x110CD, 0x110CD, 32),
    (0x110D0, 0x110E8, 2),
    (0x110F0, 0x110F9, 32),
    (0x11100, 0x11102, 12),
    (0x11103, 0x11126, 2),
    (0x11127, 0x11134, 12),
    (0x11136, 0x1113F, 32),
    (0x11140, 0x11143, 6),
    (0x11144, 0x11144, 2),
    (0x11145, 0x11146, 12),
    (0x11147, 0x11147, 2),
    (0x11150, 0x11172, 2),
    (0x11173, 0x11173, 12),
    (0x11174, 0x11174, 2),
    (0x11175, 0x11175, 7),
    (0x11176, 0x11176, 2),
    (0x11180, 0x11182, 12),
    (0x11183, 0x111B2, 2),
    (0x111B3, 0x111C0, 12),
    (0x111C1, 0x111C4, 2),
    (0x111C5, 0x111C6, 6),
    (0x111C7, 0x111C7, 2),
    (0x111C8, 0x111C8, 6),
    (0x111C9, 0x111CC, 12),
    (0x111CD, 0x111CD, 2),
    (0x111CE, 0x111CF, 12),
    (0x111D0, 0x111D9, 32),
    (0x111DA, 0x111DA, 2),
    (0x111DB, 0x111DB, 7),
    (0x111DC, 0x111DC, 2),
    (0x111DD, 0x111DF, 6),
    (0x111E1, 0x111F4, 2),
    (0x11200, 0x11211, 2),
    (0x11213, 0x1122B, 2),
    (0x1122C, 0x11237, 12),
    (0x11238, 0x11239, 6),
    (0x1123A, 0x1123A, 2),
    (0x1123B, 0x1123C, 6),
    (0x1123D, 0x1123D, 2),
    (0x1123E, 0x1123E, 12),
    (0x1123F, 0x11240, 2),
    (0x11241, 0x11241, 12),
    (0x11280, 0x11286, 2),
    (0x11288, 0x11288, 2),
    (0x1128A, 0x1128D, 2),
    (0x1128F, 0x1129D, 2),
    (0x1129F, 0x112A8, 2),
    (0x112A9, 0x112A9, 6),
    (0x112B0, 0x112DE, 2),
    (0x112DF, 0x112EA, 12),
    (0x112F0, 0x112F9, 32),
    (0x11300, 0x11303, 12),
    (0x11305, 0x1130C, 1),
    (0x1130F, 0x11310, 1),
    (0x11313, 0x11328, 1),
    (0x1132A, 0x11330, 1),
    (0x11332, 0x11333, 1),
    (0x11335, 0x11339, 1),
    (0x1133B, 0x1133C, 12),
    (0x1133D, 0x1133D, 6),
    (0x1133E, 0x11344, 12),
    (0x11347, 0x11348, 12),
    (0x1134B, 0x1134C, 12),
    (0x1134D, 0x1134D, 43),
    (0x11350, 0x11350, 4),
    (0x11357, 0x11357, 12),
    (0x1135D, 0x1135D, 6),
    (0x1135E, 0x1135F, 4),
    (0x11360, 0x11361, 1),
    (0x11362, 0x11363, 12),
    (0x11366, 0x1136C, 12),
    (0x11370, 0x11374, 12),
    (0x11400, 0x11434, 2),
    (0x11435, 0x11446, 12),
    (0x11447, 0x1144A, 2),
    (0x1144B, 0x1144E, 6),
    (0x1144F, 0x1144F, 2),
    (0x11450, 0x11459, 32),
    (0x1145A, 0x1145B, 6),
    (0x1145D, 0x1145D, 2),
    (0x1145E, 0x1145E, 12),
    (0x1145F, 0x11461, 2),
    (0x11480, 0x114AF, 2),
    (0x114B0, 0x114C3, 12),
    (0x114C4, 0x114C7, 2),
    (0x114D0, 0x114D9, 32),
    (0x11580, 0x115AE, 2),
    (0x115AF, 0x115B5, 12),
    (0x115B8, 0x115C0, 12),
    (0x115C1, 0x115C1, 7),
    (0x115C2, 0x115C3, 6),
    (0x115C4, 0x115C5, 17),
    (0x115C6, 0x115C8, 2),
    (0x115C9, 0x115D7, 6),
    (0x115D8, 0x115DB, 2),
    (0x115DC, 0x115DD, 12),
    (0x11600, 0x1162F, 2),
    (0x11630, 0x11640, 12),
    (0x11641, 0x11642, 6),
    (0x11643, 0x11644, 2),
    (0x11650, 0x11659, 32),
    (0x11660, 0x1166C, 7),
    (0x11680, 0x116AA, 2),
    (0x116AB, 0x116B7, 12),
    (0x116B8, 0x116B9, 2),
    (0x116C0, 0x116C9, 32),
    (0x11700, 0x1171A, 38),
    (0x1171D, 0x1172B, 38),
    (0x11730, 0x11739, 32),
    (0x1173A, 0x1173B, 38),
    (0x1173C, 0x1173E, 6),
    (0x1173F, 0x11746, 38),
    (0x11800, 0x1182B, 2),
    (0x1182C, 0x1183A, 12),
    (0x1183B, 0x1183B, 2),
    (0x118A0, 0x118DF, 2),
    (0x118E0, 0x118E9, 32),
    (0x118EA, 0x118F2, 2),
    (0x118FF, 0x118FF, 2),
    (0x11900, 0x11906, 1),
    (0x11909, 0x11909, 1),
    (0x1190C, 0x11913, 1),
    (0x11915, 0x11916, 1),
    (0x11918, 0x1192F, 1),
    (0x11930, 0x11935, 12),
    (0x11937, 0x11938, 12),
    (0x1193B, 0x1193D, 12),
    (0x1193E, 0x1193E, 43),
    (0x1193F, 0x1193F, 3),
    (0x11940, 0x11940, 12),
    (0x11941, 0x11941, 3),
    (0x11942, 0x11943, 12),
    (0x11944, 0x11946, 6),
    (0x11950, 0x11959, 23),
    (0x119A0, 0x119A7, 2),
    (0x119AA, 0x119D0, 2),
    (0x119D1, 0x119D7, 12),
    (0x119DA, 0x119E0, 12),
    (0x119E1, 0x119E1, 2),
    (0x119E2, 0x119E2, 7),
    (0x119E3, 0x119E3, 2),
    (0x119E4, 0x119E4, 12),
    (0x11A00, 0x11A00, 2),
    (0x11A01, 0x11A0A, 12),
    (0x11A0B, 0x11A32, 2),
    (0x11A33, 0x11A39, 12),
    (0x11A3A, 0x11A3A, 2),
    (0x11A3B, 0x11A3E, 12),
    (0x11A3F, 0x11A3F, 7),
    (0x11A40, 0x11A40, 2),
    (0x11A41, 0x11A44, 6),
    (0x11A45, 0x11A45, 7),
    (0x11A46, 0x11A46, 2),
    (0x11A47, 0x11A47, 12),
    (0x11A50, 0x11A50, 2),
    (0x11A51, 0x11A5B, 12),
    (0x11A5C, 0x11A89, 2),
    (0x11A8A, 0x11A99, 12),
    (0x11A9A, 0x11A9C, 6),
    (0x11A9D, 0x11A9D, 2),
    (0x11A9E, 0x11AA0, 7),
    (0x11AA1, 0x11AA2, 6),
    (0x11AB0, 0x11AF8, 2),
    (0x11B00, 0x11B09, 7),
    (0x11C00, 0x11C08, 2),
    (0x11C0A, 0x11C2E, 2),
    (0x11C2F, 0x11C36, 12),
    (0x11C38, 0x11C3F, 12),
    (0x11C40, 0x11C40, 2),
    (0x11C41, 0x11C45, 6),
    (0x11C50, 0x11C59, 32),
    (0x11C5A, 0x11C6C, 2),
    (0x11C70, 0x11C70, 7),
    (0x11C71, 0x11C71, 17),
    (0x11C72, 0x11C8F, 2),
    (0x11C92, 0x11CA7, 12),
    (0x11CA9, 0x11CB6, 12),
    (0x11D00, 0x11D06, 2),
    (0x11D08, 0x11D09, 2),
    (0x11D0B, 0x11D30, 2),
    (0x11D31, 0x11D36, 12),
    (0x11D3A, 0x11D3A, 12),
    (0x11D3C, 0x11D3D, 12),
    (0x11D3F, 0x11D45, 12),
    (0x11D46, 0x11D46, 2),
    (0x11D47, 0x11D47, 12),
    (0x11D50, 0x11D59, 32),
    (0x11D60, 0x11D65, 2),
    (0x11D67, 0x11D68, 2),
    (0x11D6A, 0x11D89, 2),
    (0x11D8A, 0x11D8E, 12),
    (0x11D90, 0x11D91, 12),
    (0x11D93, 0x11D97, 12),
    (0x11D98, 0x11D98, 2),
    (0x11DA0, 0x11DA9, 32),
    (0x11EE0, 0x11EF1, 4),
    (0x11EF2, 0x11EF2, 6),
    (0x11EF3, 0x11EF6, 12),
    (0x11EF7, 0x11EF8, 6),
    (0x11F00, 0x11F01, 12),
    (0x11F02, 0x11F02, 3),
    (0x11F03, 0x11F03, 12),
    (0x11F04, 0x11F10, 1),
    (0x11F12, 0x11F33, 1),
    (0x11F34, 0x11F3A, 12),
    (0x11F3E, 0x11F41, 12),
    (0x11F42, 0x11F42, 43),
    (0x11F43, 0x11F44, 6),
    (0x11F45, 0x11F4F, 23),
    (0x11F50, 0x11F59, 4),
    (0x11FB0, 0x11FB0, 2),
    (0x11FC0, 0x11FDC, 2),
    (0x11FDD, 0x11FE0, 34),
    (0x11FE1, 0x11FF1, 2),
    (0x11FFF, 0x11FFF, 6),
    (0x12000, 0x12399, 2),
    (0x12400, 0x1246E, 2),
    (0x12470, 0x12474, 6),
    (0x12480, 0x12543, 2),
    (0x12F90, 0x12FF2, 2),
    (0x13000, 0x13257, 2),
    (0x13258, 0x1325A, 33),
    (0x1325B, 0x1325D, 11),
    (0x1325E, 0x13281, 2),
    (0x13282, 0x13282, 11),
    (0x13283, 0x13285, 2),
    (0x13286, 0x13286, 33),
    (0x13287, 0x13287, 11),
    (0x13288, 0x13288, 33),
    (0x13289, 0x13289, 11),
    (0x1328A, 0x13378, 2),
    (0x13379, 0x13379, 33),
    (0x1337A, 0x1337B, 11),
    (0x1337C, 0x1342E, 2),
    (0x1342F, 0x1342F, 33),
    (0x13430, 0x13436, 18),
    (0x13437, 0x13437, 33),
    (0x13438, 0x13438, 11),
    (0x13439, 0x1343B, 18),
    (0x1343C, 0x1343C, 33),
    (0x1343D, 0x1343D, 11),
    (0x1343E, 0x1343E, 33),
    (0x1343F, 0x1343F, 11),
    (0x13440, 0x13440, 12),
    (0x13441, 0x13446, 2),
    (0x13447, 0x13455, 12),
    (0x14400, 0x145CD, 2),
    (0x145CE, 0x145CE, 33),
    (0x145CF, 0x145CF, 11),
    (0x145D0, 0x14646, 2),
    (0x16800, 0x16A38, 2),
    (0x16A40, 0x16A5E, 2),
    (0x16A60, 0x16A69, 32),
    (0x16A6E, 0x16A6F, 6),
    (0x16A70, 0x16ABE, 2),
    (0x16AC0, 0x16AC9, 32),
    (0x16AD0, 0x16AED, 2),
    (0x16AF0, 0x16AF4, 12),
    (0x16AF5, 0x16AF5, 6),
    (0x16B00, 0x16B2F, 2),
    (0x16B30, 0x16B36, 12),
    (0x16B37, 0x16B39, 6),
    (0x16B3A, 0x16B43, 2),
    (0x16B44, 0x16B44, 6),
    (0x16B45, 0x16B45, 2),
    (0x16B50, 0x16B59, 32),
    (0x16B5B, 0x16B61, 2),
    (0x16B63, 0x16B77, 2),
    (0x16B7D, 0x16B8F, 2),
    (0x16E40, 0x16E96, 2),
    (0x16E97, 0x16E98, 6),
    (0x16E99, 0x16E9A, 2),
    (0x16F00, 0x16F4A, 2),
    (0x16F4F, 0x16F4F, 12),
    (0x16F50, 0x16F50, 2),
    (0x16F51, 0x16F87, 12),
    (0x16F8F, 0x16F92, 12),
    (0x16F93, 0x16F9F, 2),
    (0x16FE0, 0x16FE3, 31),
    (0x16FE4, 0x16FE4, 18),
    (0x16FF0, 0x16FF1, 12),
    (0x17000, 0x187F7, 23),
    (0x18800, 0x18AFF, 23),
    (0x18B00, 0x18CD5, 2),
    (0x18D00, 0x18D08, 23),
    (0x1AFF0, 0x1AFF3, 2),
    (0x1AFF5, 0x1AFFB, 2),
    (0x1AFFD, 0x1AFFE, 2),
    (0x1B000, 0x1B122, 23),
    (0x1B132, 0x1B132, 10),
    (0x1B150, 0x1B152, 10),
    (0x1B155, 0x1B155, 10),
    (0x1B164, 0x1B167, 10),
    (0x1B170, 0x1B2FB, 23),
    (0x1BC00, 0x1BC6A, 2),
    (0x1BC70, 0x1BC7C, 2),
    (0x1BC80, 0x1BC88, 2),
    (0x1BC90, 0x1BC99, 2),
    (0x1BC9C, 0x1BC9C, 2),
    (0x1BC9D, 0x1BC9E, 12),
    (0x1BC9F, 0x1BC9F, 6),
    (0x1BCA0, 0x1BCA3, 12),
    (0x1CF00, 0x1CF2D, 12),
    (0x1CF30, 0x1CF46, 12),
    (0x1CF50, 0x1CFC3, 2),
    (0x1D000, 0x1D0F5, 2),
    (0x1D100, 0x1D126, 2),
    (0x1D129, 0x1D164, 2),
    (0x1D165, 0x1D169, 12),
    (0x1D16A, 0x1D16C, 2),
    (0x1D16D, 0x1D182, 12),
    (0x1D183, 0x1D184, 2),
    (0x1D185, 0x1D18B, 12),
    (0x1D18C, 0x1D1A9, 2),
    (0x1D1AA, 0x1D1AD, 12),
    (0x1D1AE, 0x1D1EA, 2),
    (0x1D200, 0x1D241, 2),
    (0x1D242, 0x1D244, 12),
    (0x1D245, 0x1D245, 2),
    (0x1D2C0, 0x1D2D3, 2),
    (0x1D2E0, 0x1D2F3, 2),
    (0x1D300, 0x1D356, 2),
    (0x1D360, 0x1D378, 2),
    (0x1D400, 0x1D454, 2),
    (0x1D456, 0x1D49C, 2),
    (0x1D49E, 0x1D49F, 2),
    (0x1D4A2, 0x1D4A2, 2),
    (0x1D4A5, 0x1D4A6, 2),
    (0x1D4A9, 0x1D4AC, 2),
    (0x1D4AE, 0x1D4B9, 2),
    (0x1D4BB, 0x1D4BB, 2),
    (0x1D4BD, 0x1D4C3, 2),
    (0x1D4C5, 0x1D505, 2),
    (0x1D507, 0x1D50A, 2),
    (0x1D50D, 0x1D514, 2),
    (0x1D516, 0x1D51C, 2),
    (0x1D51E, 0x1D539, 2),
    (0x1D53B, 0x1D53E, 2),
    (0x1D540, 0x1D544, 2),
    (0x1D546, 0x1D546, 2),
    (0x1D54A, 0x1D550, 2),
    (0x1D552, 0x1D6A5, 2),
    (0x1D6A8, 0x1D7CB, 2),
    (0x1D7CE, 0x1D7FF, 32),
    (0x1D800, 0x1D9FF, 2),
    (0x1DA00, 0x1DA36, 12),
    (0x1DA37, 0x1DA3A, 2),
    (0x1DA3B, 0x1DA6C, 12),
    (0x1DA6D, 0x1DA74, 2),
    (0x1DA75, 0x1DA75, 12),
    (0x1DA76, 0x1DA83, 2),
    (0x1DA84, 0x1DA84, 12),
    (0x1DA85, 0x1DA86, 2),
    (0x1DA87, 0x1DA8A, 6),
    (0x1DA8B, 0x1DA8B, 2),
    (0x1DA9B, 0x1DA9F, 12),
    (0x1DAA1, 0x1DAAF, 12),
    (0x1DF00, 0x1DF1E, 2),
    (0x1DF25, 0x1DF2A, 2),
    (0x1E000, 0x1E006, 12),
    (0x1E008, 0x1E018, 12),
    (0x1E01B, 0x1E021, 12),
    (0x1E023, 0x1E024, 12),
    (0x1E026, 0x1E02A, 12),
    (0x1E030, 0x1E06D, 2),
    (0x1E08F, 0x1E08F, 12),
    (0x1E100, 0x1E12C, 2),
    (0x1E130, 0x1E136, 12),
    (0x1E137, 0x1E13D, 2),
    (0x1E140, 0x1E149, 32),
    (0x1E14E, 0x1E14F, 2),
    (0x1E290, 0x1E2AD, 2),
    (0x1E2AE, 0x1E2AE, 12),
    (0x1E2C0, 0x1E2EB, 2),
    (0x1E2EC, 0x1E2EF, 12),
    (0x1E2F0, 0x1E2F9, 32),
    (0x1E2FF, 0x1E2FF, 35),
    (0x1E4D0, 0x1E4EB, 2),
    (0x1E4EC, 0x1E4EF, 12),
    (0x1E4F0, 0x1E4F9, 32),
    (0x1E7E0, 0x1E7E6, 2),
    (0x1E7E8, 0x1E7EB, 2),
    (0x1E7ED, 0x1E7EE, 2),
    (0x1E7F0, 0x1E7FE, 2),
    (0x1E800, 0x1E8C4, 2),
    (0x1E8C7, 0x1E8CF, 2),
    (0x1E8D0, 0x1E8D6, 12),
    (0x1E900, 0x1E943, 2),
    (0x1E944, 0x1E94A, 12),
    (0x1E94B, 0x1E94B, 2),
    (0x1E950, 0x1E959, 32),
    (0x1E95E, 0x1E95F, 33),
    (0x1EC71, 0x1ECAB, 2),
    (0x1ECAC, 0x1ECAC, 34),
    (0x1ECAD, 0x1ECAF, 2),
    (0x1ECB0, 0x1ECB0, 34),
    (0x1ECB1, 0x1ECB4, 2),
    (0x1ED01, 0x1ED3D, 2),
    (0x1EE00, 0x1EE03, 2),
    (0x1EE05, 0x1EE1F, 2),
    (0x1EE21, 0x1EE22, 2),
    (0x1EE24, 0x1EE24, 2),
    (0x1EE27, 0x1EE27, 2),
    (0x1EE29, 0x1EE32, 2),
    (0x1EE34, 0x1EE37, 2),
    (0x1EE39, 0x1EE39, 2),
    (0x1EE3B, 0x1EE3B, 2),
    (0x1EE42, 0x1EE42, 2),
    (0x1EE47, 0x1EE47, 2),
    (0x1EE49, 0x1EE49, 2),
    (0x1EE4B, 0x1EE4B, 2),
    (0x1EE4D, 0x1EE4F, 2),
    (0x1EE51, 0x1EE52, 2),
    (0x1EE54, 0x1EE54, 2),
    (0x1EE57, 0x1EE57, 2),
    (0x1EE59, 0x1EE59, 2),
    (0x1EE5B, 0x1EE5B, 2),
    (0x1EE5D, 0x1EE5D, 2),
    (0x1EE5F, 0x1EE5F, 2),
    (0x1EE61, 0x1EE62, 2),
    (0x1EE64, 0x1EE64, 2),
    (0x1EE67, 0x1EE6A, 2),
    (0x1EE6C, 0x1EE72, 2),
    (0x1EE74, 0x1EE77, 2),
    (0x1EE79, 0x1EE7C, 2),
    (0x1EE7E, 0x1EE7E, 2),
    (0x1EE80, 0x1EE89, 2),
    (0x1EE8B, 0x1EE9B, 2),
    (0x1EEA1, 0x1EEA3, 2),
    (0x1EEA5, 0x1EEA9, 2),
    (0x1EEAB, 0x1EEBB, 2),
    (0x1EEF0, 0x1EEF1, 2),
    (0x1F000, 0x1F0FF, 23),
    (0x1F100, 0x1F10C, 0),
    (0x1F10D, 0x1F10F, 23),
    (0x1F110, 0x1F12D, 0),
    (0x1F12E, 0x1F12F, 2),
    (0x1F130, 0x1F169, 0),
    (0x1F16A, 0x1F16C, 2),
    (0x1F16D, 0x1F16F, 23),
    (0x1F170, 0x1F1AC, 0),
    (0x1F1AD, 0x1F1E5, 23),
    (0x1F1E6, 0x1F1FF, 37),
    (0x1F200, 0x1F384, 23),
    (0x1F385, 0x1F385, 15),
    (0x1F386, 0x1F39B, 23),
    (0x1F39C, 0x1F39D, 2),
    (0x1F39E, 0x1F3B4, 23),
    (0x1F3B5, 0x1F3B6, 2),
    (0x1F3B7, 0x1F3BB, 23),
    (0x1F3BC, 0x1F3BC, 2),
    (0x1F3BD, 0x1F3C1, 23),
    (0x1F3C2, 0x1F3C4, 15),
    (0x1F3C5, 0x1F3C6, 23),
    (0x1F3C7, 0x1F3C7, 15),
    (0x1F3C8, 0x1F3C9, 23),
    (0x1F3CA, 0x1F3CC, 15),
    (0x1F3CD, 0x1F3FA, 23),
    (0x1F3FB, 0x1F3FF, 16),
    (0x1F400, 0x1F441, 23),
    (0x1F442, 0x1F443, 15),
    (0x1F444, 0x1F445, 23),
    (0x1F446, 0x1F450, 15),
    (0x1F451, 0x1F465, 23),
    (0x1F466, 0x1F478, 15),
    (0x1F479, 0x1F47B, 23),
    (0x1F47C, 0x1F47C, 15),
    (0x1F47D, 0x1F480, 23),
    (0x1F481, 0x1F483, 15),
    (0x1F484, 0x1F484, 23),
    (0x1F485, 0x1F487, 15),
    (0x1F488, 0x1F48E, 23),
    (0x1F48F, 0x1F48F, 15),
    (0x1F490, 0x1F490, 23),
    (0x1F491, 0x1F491, 15),
    (0x1F492, 0x1F49F, 23),
    (0x1F4A0, 0x1F4A0, 2),
    (0x1F4A1, 0x1F4A1, 23),
    (0x1F4A2, 0x1F4A2, 2),
    (0x1F4A3, 0x1F4A3, 23),
    (0x1F4A4, 0x1F4A4, 2),
    (0x1F4A5, 0x1F4A9, 23),
    (0x1F4AA, 0x1F4AA, 15),
    (0x1F4AB, 0x1F4AE, 23),
    (0x1F4AF, 0x1F4AF, 2),
    (0x1F4B0, 0x1F4B0, 23),
    (0x1F4B1, 0x1F4B2, 2),
    (0x1F4B3, 0x1F4FF, 23),
    (0x1F500, 0x1F506, 2),
    (0x1F507, 0x1F516, 23),
    (0x1F517, 0x1F524, 2),
    (0x1F525, 0x1F531, 23),
    (0x1F532, 0x1F549, 2),
    (0x1F54A, 0x1F573, 23),
    (0x1F574, 0x1F575, 15),
    (0x1F576, 0x1F579, 23),
    (0x1F57A, 0x1F57A, 15),
    (0x1F57B, 0x1F58F, 23),
    (0x1F590, 0x1F590, 15),
    (0x1F591, 0x1F594, 23),
    (0x1F595, 0x1F596, 15),
    (0x1F597, 0x1F5D3, 23),
    (0x1F5D4, 0x1F5DB, 2),
    (0x1F5DC, 0x1F5F3, 23),
    (0x1F5F4, 0x1F5F9, 2),
    (0x1F5FA, 0x1F644, 23),
    (0x1F645, 0x1F647, 15),
    (0x1F648, 0x1F64A, 23),
    (0x1F64B, 0x1F64F, 15),
    (0x1F650, 0x1F675, 2),
    (0x1F676, 0x1F678, 36),
    (0x1F679, 0x1F67B, 31),
    (0x1F67C, 0x1F67F, 2),
    (0x1F680, 0x1F6A2, 23),
    (0x1F6A3, 0x1F6A3, 15),
    (0x1F6A4, 0x1F6B3, 23),
    (0x1F6B4, 0x1F6B6, 15),
    (0x1F6B7, 0x1F6BF, 23),
    (0x1F6C0, 0x1F6C0, 15),
    (0x1F6C1, 0x1F6CB, 23),
    (0x1F6CC, 0x1F6CC, 15),
    (0x1F6CD, 0x1F6FF, 23),
    (0x1F700, 0x1F773, 2),
    (0x1F774, 0x1F77F, 23),
    (0x1F780, 0x1F7D4, 2),
    (0x1F7D5, 0x1F7FF, 23),
    (0x1F800, 0x1F80B, 2),
    (0x1F80C, 0x1F80F, 23),
    (0x1F810, 0x1F847, 2),
    (0x1F848, 0x1F84F, 23),
    (0x1F850, 0x1F859, 2),
    (0x1F85A, 0x1F85F, 23),
    (0x1F860, 0x1F887, 2),
    (0x1F888, 0x1F88F, 23),
    (0x1F890, 0x1F8AD, 2),
    (0x1F8AE, 0x1F8FF, 23),
    (0x1F900, 0x1F90B, 2),
    (0x1F90C, 0x1F90C, 15),
    (0x1F90D, 0x1F90E, 23),
    (0x1F90F, 0x1F90F, 15),
    (0x1F910, 0x1F917, 23),
    (0x1F918, 0x1F91F, 15),
    (0x1F920, 0x1F925, 23),
    (0x1F926, 0x1F926, 15),
    (0x1F927, 0x1F92F, 23),
    (0x1F930, 0x1F939, 15),
    (0x1F93A, 0x1F93B, 23),
    (0x1F93C, 0x1F93E, 15),
    (0x1F93F, 0x1F976, 23),
    (0x1F977, 0x1F977, 15),
    (0x1F978, 0x1F9B4, 23),
    (0x1F9B5, 0x1F9B6, 15),
    (0x1F9B7, 0x1F9B7, 23),
    (0x1F9B8, 0x1F9B9, 15),
    (0x1F9BA, 0x1F9BA, 23),
    (0x1F9BB, 0x1F9BB, 15),
    (0x1F9BC, 0x1F9CC, 23),
    (0x1F9CD, 0x1F9CF, 15),
    (0x1F9D0, 0x1F9D0, 23),
    (0x1F9D1, 0x1F9DD, 15),
    (0x1F9DE, 0x1F9FF, 23),
    (0x1FA00, 0x1FA53, 2),
    (0x1FA54, 0x1FAC2, 23),
    (0x1FAC3, 0x1FAC5, 15),
    (0x1FAC6, 0x1FAEF, 23),
    (0x1FAF0, 0x1FAF8, 15),
    (0x1FAF9, 0x1FAFF, 23),
    (0x1FB00, 0x1FB92, 2),
    (0x1FB94, 0x1FBCA, 2),
    (0x1FBF0, 0x1FBF9, 32),
    (0x1FC00, 0x1FFFD, 23),
    (0x20000, 0x2FFFD, 23),
    (0x30000, 0x3FFFD, 23),
    (0xE0001, 0xE0001, 12),
    (0xE0020, 0xE007F, 12),
    (0xE0100, 0xE01EF, 12),
];
